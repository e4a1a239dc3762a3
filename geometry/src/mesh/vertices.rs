//! Caller-supplied vertex meshes and their GPU buffer builders.
//!
//! A [`VerticesGeometry`] is built once from a [`VerticesDescriptor`] and is
//! immutable afterwards. Triangle fans are unrolled into triangle-list
//! indices during construction, so every later query and every buffer build
//! sees GPU-native topology.
//!
//! Three builders pack the mesh into the interleaved formats in
//! [`layout`](super::layout):
//!
//! - [`position_buffer`](VerticesGeometry::position_buffer) - raw points
//! - [`position_color_buffer`](VerticesGeometry::position_color_buffer) - points + colors
//! - [`position_uv_color_buffer`](VerticesGeometry::position_uv_color_buffer) -
//!   points + derived UVs + colors
//!
//! [`vertex_type`](VerticesGeometry::vertex_type) tells callers which one the
//! mesh's attributes call for.

use std::mem::{align_of, size_of};

use static_assertions::{assert_impl_all, const_assert_eq};

use crate::color::Color;
use crate::draw::{DrawContext, RenderTarget};
use crate::error::GeometryError;
use crate::math::{Mat4, Point, clamp_uv, transform_point};
use crate::rect::Rect;
use crate::result::{GeometryResult, VertexBuffer};
use crate::transient::{BufferView, TransientAllocator};

use super::data::{GeometryVertexType, IndexType, PrimitiveType, VertexMode};
use super::fan::unroll_fan_indices;
use super::layout::{PerVertexData, PositionColorVertex, PositionUvColorVertex, PositionVertex};

// The position builder uploads the point array as-is.
const_assert_eq!(size_of::<Point>(), size_of::<PositionVertex>());

/// Color packed for vertices of a mesh that carries no colors.
const FALLBACK_COLOR: Color = Color::WHITE;

/// Descriptor for creating a [`VerticesGeometry`].
///
/// # Example
///
/// ```
/// use redlilium_geometry::math::Point;
/// use redlilium_geometry::mesh::{VertexMode, VerticesDescriptor, VerticesGeometry};
/// use redlilium_geometry::rect::Rect;
///
/// let desc = VerticesDescriptor::new(
///     vec![
///         Point::new(0.0, 0.0),
///         Point::new(10.0, 0.0),
///         Point::new(10.0, 10.0),
///         Point::new(0.0, 10.0),
///     ],
///     Rect::from_ltrb(0.0, 0.0, 10.0, 10.0),
/// )
/// .with_vertex_mode(VertexMode::TriangleFan);
///
/// let geometry = VerticesGeometry::new(desc).unwrap();
/// assert_eq!(geometry.indices(), &[0, 1, 2, 0, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VerticesDescriptor {
    /// Vertex positions.
    pub vertices: Vec<Point>,
    /// Indices into `vertices` (empty for unindexed drawing).
    pub indices: Vec<u16>,
    /// Per-vertex texture coordinates (empty or one per vertex).
    pub texture_coordinates: Vec<Point>,
    /// Per-vertex colors (empty or one per vertex).
    pub colors: Vec<Color>,
    /// Precomputed bounds of the mesh, used for coverage.
    pub bounds: Rect,
    /// How the vertices are assembled into triangles.
    pub vertex_mode: VertexMode,
}

impl VerticesDescriptor {
    /// Create a descriptor for unindexed, uncolored triangles.
    pub fn new(vertices: Vec<Point>, bounds: Rect) -> Self {
        Self {
            vertices,
            bounds,
            ..Default::default()
        }
    }

    /// Set the index list.
    pub fn with_indices(mut self, indices: Vec<u16>) -> Self {
        self.indices = indices;
        self
    }

    /// Set per-vertex texture coordinates.
    pub fn with_texture_coordinates(mut self, texture_coordinates: Vec<Point>) -> Self {
        self.texture_coordinates = texture_coordinates;
        self
    }

    /// Set per-vertex colors.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Set the vertex mode.
    pub fn with_vertex_mode(mut self, vertex_mode: VertexMode) -> Self {
        self.vertex_mode = vertex_mode;
        self
    }
}

/// An immutable vertex mesh ready to be packed into GPU buffers.
///
/// If the mesh was described as a triangle fan, [`indices`](Self::indices)
/// holds the unrolled triangle list while [`vertex_mode`](Self::vertex_mode)
/// still reports [`VertexMode::TriangleFan`].
#[derive(Debug, Clone)]
pub struct VerticesGeometry {
    vertices: Vec<Point>,
    indices: Vec<u16>,
    texture_coordinates: Vec<Point>,
    colors: Vec<Color>,
    bounds: Rect,
    vertex_mode: VertexMode,
}

assert_impl_all!(VerticesGeometry: Send, Sync);

impl VerticesGeometry {
    /// Validate a descriptor and normalize its topology.
    ///
    /// Non-empty `colors` and `texture_coordinates` must have one entry per
    /// vertex. Indices are not range-checked.
    pub fn new(desc: VerticesDescriptor) -> Result<Self, GeometryError> {
        let VerticesDescriptor {
            vertices,
            mut indices,
            texture_coordinates,
            colors,
            bounds,
            vertex_mode,
        } = desc;

        check_attribute_len("colors", vertices.len(), colors.len())?;
        check_attribute_len(
            "texture_coordinates",
            vertices.len(),
            texture_coordinates.len(),
        )?;

        if vertex_mode == VertexMode::TriangleFan {
            indices = unroll_fan_indices(&vertices, &indices);
        }

        log::debug!(
            "VerticesGeometry: {} vertices, {} indices, {:?}, colors: {}, uvs: {}",
            vertices.len(),
            indices.len(),
            vertex_mode,
            !colors.is_empty(),
            !texture_coordinates.is_empty()
        );

        Ok(Self {
            vertices,
            indices,
            texture_coordinates,
            colors,
            bounds,
            vertex_mode,
        })
    }

    /// Get the vertex positions.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the (normalized) indices.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Get the texture coordinates (empty if none were supplied).
    pub fn texture_coordinates(&self) -> &[Point] {
        &self.texture_coordinates
    }

    /// Get the vertex colors (empty if none were supplied).
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Get the caller-supplied bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Get the vertex mode the mesh was described with.
    pub fn vertex_mode(&self) -> VertexMode {
        self.vertex_mode
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Check if this mesh draws through an index buffer.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Primitive type the built buffers are drawn with.
    ///
    /// Fans report [`PrimitiveType::Triangle`]; they were unrolled on construction.
    pub fn primitive_type(&self) -> PrimitiveType {
        self.vertex_mode.primitive_type()
    }

    pub fn has_vertex_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn has_texture_coordinates(&self) -> bool {
        !self.texture_coordinates.is_empty()
    }

    /// Which buffer builder this mesh's attributes call for.
    ///
    /// Colors take precedence over texture coordinates.
    pub fn vertex_type(&self) -> GeometryVertexType {
        if self.has_vertex_colors() {
            GeometryVertexType::Color
        } else if self.has_texture_coordinates() {
            GeometryVertexType::UV
        } else {
            GeometryVertexType::Position
        }
    }

    /// Bounds of the texture coordinates.
    ///
    /// `None` means "no coverage constraint": the mesh has no texture
    /// coordinates or no vertices.
    pub fn texture_coordinate_coverage(&self) -> Option<Rect> {
        if !self.has_texture_coordinates() || self.vertices.is_empty() {
            return None;
        }
        Rect::point_bounds(&self.texture_coordinates)
    }

    /// Bounds of the mesh under `transform`.
    pub fn coverage(&self, transform: &Mat4) -> Rect {
        self.bounds.transform_bounds(transform)
    }

    /// Pack raw positions.
    pub fn position_buffer(
        &self,
        allocator: &mut dyn TransientAllocator,
        context: &dyn DrawContext,
        target: &dyn RenderTarget,
    ) -> GeometryResult {
        let vertex_buffer = allocator.emplace(
            bytemuck::cast_slice::<Point, u8>(&self.vertices),
            align_of::<f32>(),
        );
        log::trace!(
            "position buffer: {} vertices, {} bytes",
            self.vertices.len(),
            vertex_buffer.size
        );
        self.finish(vertex_buffer, allocator, context, target)
    }

    /// Pack positions interleaved with per-vertex colors.
    pub fn position_color_buffer(
        &self,
        allocator: &mut dyn TransientAllocator,
        context: &dyn DrawContext,
        target: &dyn RenderTarget,
    ) -> GeometryResult {
        let records = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| PositionColorVertex {
                position: [vertex.x, vertex.y],
                color: self.color_at(i),
            });
        let vertex_buffer = emplace_records(allocator, records);
        log::trace!(
            "position+color buffer: {} vertices, {} bytes",
            self.vertices.len(),
            vertex_buffer.size
        );
        self.finish(vertex_buffer, allocator, context, target)
    }

    /// Pack positions, derived texture coordinates and colors.
    ///
    /// UVs are the texture coordinates (or, without any, the positions
    /// themselves) mapped through `effect_transform` and then through the
    /// transform normalizing `texture_coverage` to the unit square. Both
    /// components are clamped into `[0, 1 - UV_CLAMP_EPSILON]`.
    pub fn position_uv_color_buffer(
        &self,
        texture_coverage: Rect,
        effect_transform: &Mat4,
        allocator: &mut dyn TransientAllocator,
        context: &dyn DrawContext,
        target: &dyn RenderTarget,
    ) -> GeometryResult {
        let uv_transform = texture_coverage.normalizing_transform() * effect_transform;
        let has_texture_coordinates = self.has_texture_coordinates();

        let records = self.vertices.iter().enumerate().map(|(i, vertex)| {
            let source = if has_texture_coordinates {
                &self.texture_coordinates[i]
            } else {
                vertex
            };
            let uv = clamp_uv(transform_point(&uv_transform, source));
            PositionUvColorVertex {
                vertices: [vertex.x, vertex.y],
                texture_coords: [uv.x, uv.y],
                color: self.color_at(i),
            }
        });
        let vertex_buffer = emplace_records(allocator, records);
        log::trace!(
            "position+uv+color buffer: {} vertices, {} bytes",
            self.vertices.len(),
            vertex_buffer.size
        );
        self.finish(vertex_buffer, allocator, context, target)
    }

    fn color_at(&self, index: usize) -> [f32; 4] {
        self.colors
            .get(index)
            .copied()
            .unwrap_or(FALLBACK_COLOR)
            .to_array()
    }

    /// Emplace indices (if any) and assemble the result.
    fn finish(
        &self,
        vertex_buffer: BufferView,
        allocator: &mut dyn TransientAllocator,
        context: &dyn DrawContext,
        target: &dyn RenderTarget,
    ) -> GeometryResult {
        let index_count = self.indices.len();
        let (index_buffer, vertex_count, index_type) = if index_count > 0 {
            let view = allocator.emplace(
                bytemuck::cast_slice::<u16, u8>(&self.indices),
                align_of::<u16>(),
            );
            (Some(view), index_count, IndexType::Uint16)
        } else {
            (None, self.vertices.len(), IndexType::None)
        };

        GeometryResult {
            primitive_type: self.primitive_type(),
            vertex_buffer: VertexBuffer {
                vertex_buffer,
                index_buffer,
                vertex_count,
                index_type,
            },
            transform: context.shader_transform(target),
        }
    }
}

fn check_attribute_len(
    attribute: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), GeometryError> {
    if actual != 0 && actual != expected {
        return Err(GeometryError::AttributeLengthMismatch {
            attribute,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Copy records into one allocation, each at its fixed stride.
fn emplace_records<V: PerVertexData>(
    allocator: &mut dyn TransientAllocator,
    records: impl ExactSizeIterator<Item = V>,
) -> BufferView {
    let stride = size_of::<V>();
    let mut records = records;
    allocator.emplace_with(records.len() * stride, align_of::<V>(), &mut |data: &mut [u8]| {
        for (chunk, record) in data.chunks_exact_mut(stride).zip(&mut records) {
            chunk.copy_from_slice(bytemuck::bytes_of(&record));
        }
    })
}
