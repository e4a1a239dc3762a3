//! The envelope every buffer builder returns.

use crate::math::Mat4;
use crate::mesh::{IndexType, PrimitiveType};
use crate::transient::BufferView;

/// Vertex and index buffer views for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexBuffer {
    /// Packed vertex records.
    pub vertex_buffer: BufferView,
    /// 16-bit indices, if the mesh is indexed.
    pub index_buffer: Option<BufferView>,
    /// Number of indices when indexed, otherwise number of vertices.
    pub vertex_count: usize,
    /// Width of the entries in `index_buffer`.
    pub index_type: IndexType,
}

impl VertexBuffer {
    /// Number of indices in the index buffer (0 for unindexed draws).
    pub fn index_count(&self) -> usize {
        match self.index_type {
            IndexType::None => 0,
            IndexType::Uint16 => self.vertex_count,
        }
    }
}

/// Everything the render-submission stage needs to issue one draw.
///
/// The buffer views point into the transient allocator the builder was given
/// and must not be used after that allocator is reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryResult {
    pub primitive_type: PrimitiveType,
    pub vertex_buffer: VertexBuffer,
    /// Shader transform from the draw context.
    pub transform: Mat4,
}

impl GeometryResult {
    pub fn is_indexed(&self) -> bool {
        self.vertex_buffer.index_type != IndexType::None
    }
}
