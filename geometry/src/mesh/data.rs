//! Topology and buffer classification types.
//!
//! This module provides:
//! - [`VertexMode`] - How the caller's vertices are assembled into triangles
//! - [`PrimitiveType`] - The GPU primitive a built buffer is drawn with
//! - [`IndexType`] - Index width of a built buffer
//! - [`GeometryVertexType`] - Which buffer builder a mesh's attributes call for

/// Topology of the vertices handed to [`VerticesGeometry`](super::VerticesGeometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexMode {
    /// Every three vertices form a triangle.
    #[default]
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Every triangle shares the first vertex.
    ///
    /// Not supported by GPUs; unrolled into a triangle list on construction.
    TriangleFan,
}

impl VertexMode {
    /// The primitive type used to draw this mode once fans are unrolled.
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            // Unrolled into a triangle list.
            Self::TriangleFan => PrimitiveType::Triangle,
            Self::TriangleStrip => PrimitiveType::TriangleStrip,
            Self::Triangles => PrimitiveType::Triangle,
        }
    }
}

/// Primitive type submitted to the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Every three vertices form a triangle.
    Triangle,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveType {
    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::Triangle => Some(3),
            Self::TriangleStrip => None,
        }
    }
}

/// Index width of a built vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexType {
    /// No index buffer; vertices are drawn in order.
    #[default]
    None,
    /// 16-bit unsigned indices.
    Uint16,
}

impl IndexType {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Uint16 => std::mem::size_of::<u16>(),
        }
    }
}

/// Vertex format a mesh should be packed into.
///
/// Chosen from attribute presence: colors win over texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryVertexType {
    /// Position only.
    Position,
    /// Position and per-vertex color.
    Color,
    /// Position, texture coordinates and color.
    UV,
}
