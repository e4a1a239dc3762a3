//! Per-vertex record shapes for the geometry shading pipelines.
//!
//! Each pipeline reads a single interleaved vertex buffer. The record structs
//! here are `#[repr(C)]` and `Pod`, so packing a vertex is a plain byte copy,
//! and each record describes itself through a [`VertexLayout`] that pipeline
//! creation can consume.
//!
//! | Record                    | Stride | Attributes                              |
//! |---------------------------|--------|-----------------------------------------|
//! | [`PositionVertex`]        | 8      | position `float2`                       |
//! | [`PositionColorVertex`]   | 24     | position `float2`, color `float4`       |
//! | [`PositionUvColorVertex`] | 32     | position, texcoord `float2`, color `float4` |

use std::sync::Arc;

use static_assertions::const_assert_eq;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float2).
    Position,
    /// Texture coordinates (float2).
    TexCoord,
    /// Vertex color (float4).
    Color,
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float4 => 16,
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex record.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u32) -> Self {
        Self {
            semantic,
            format,
            offset,
        }
    }

    /// Create a position attribute (float2).
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float2,
            offset,
        )
    }

    /// Create a texcoord attribute (float2).
    pub fn texcoord(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::TexCoord,
            VertexAttributeFormat::Float2,
            offset,
        )
    }

    /// Create a color attribute (float4).
    pub fn color(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Color,
            VertexAttributeFormat::Float4,
            offset,
        )
    }

    /// Byte offset one past the end of this attribute.
    pub fn end(&self) -> u32 {
        self.offset + self.format.size() as u32
    }
}

/// Describes an interleaved single-buffer vertex record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices.
    pub stride: u32,
    /// The vertex attributes, in shader location order.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty vertex layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Validate the layout (every attribute lies inside the stride).
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.end() > self.stride {
                return Err(format!(
                    "Attribute {:?} ends at byte {} but the stride is {}",
                    attr.semantic,
                    attr.end(),
                    self.stride
                ));
            }
        }
        Ok(())
    }

    /// Position-only layout (8 bytes per vertex).
    pub fn position() -> Arc<Self> {
        Arc::new(
            Self::new(8)
                .with_attribute(VertexAttribute::position(0))
                .with_label("position"),
        )
    }

    /// Position + color layout (24 bytes per vertex).
    pub fn position_color() -> Arc<Self> {
        Arc::new(
            Self::new(24)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::color(8))
                .with_label("position_color"),
        )
    }

    /// Position + texcoord + color layout (32 bytes per vertex).
    pub fn position_uv_color() -> Arc<Self> {
        Arc::new(
            Self::new(32)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::texcoord(8))
                .with_attribute(VertexAttribute::color(16))
                .with_label("position_uv_color"),
        )
    }
}

/// A vertex record a geometry pipeline reads byte-for-byte.
pub trait PerVertexData: bytemuck::Pod {
    /// Layout describing this record.
    fn layout() -> Arc<VertexLayout>;
}

/// Position-only vertex record.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 2],
}

/// Position + color vertex record.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Position + texture coordinate + color vertex record.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionUvColorVertex {
    pub vertices: [f32; 2],
    pub texture_coords: [f32; 2],
    pub color: [f32; 4],
}

const_assert_eq!(std::mem::size_of::<PositionVertex>(), 8);
const_assert_eq!(std::mem::size_of::<PositionColorVertex>(), 24);
const_assert_eq!(std::mem::size_of::<PositionUvColorVertex>(), 32);

impl PerVertexData for PositionVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position()
    }
}

impl PerVertexData for PositionColorVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position_color()
    }
}

impl PerVertexData for PositionUvColorVertex {
    fn layout() -> Arc<VertexLayout> {
        VertexLayout::position_uv_color()
    }
}
