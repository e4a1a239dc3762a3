//! Vertex meshes and their GPU buffer layouts.
//!
//! This module provides:
//!
//! - [`VerticesGeometry`] - Immutable mesh, fan-normalized on construction,
//!   with the three buffer builders
//! - [`VerticesDescriptor`] - Descriptor for creating a [`VerticesGeometry`]
//! - [`unroll_fan_indices`] - Triangle fan to triangle list conversion
//! - Per-vertex record types and their [`VertexLayout`]s
//! - Generators for common fan shapes (rectangle, circle)

mod data;
mod fan;
pub mod generators;
mod layout;
mod vertices;

pub use data::{GeometryVertexType, IndexType, PrimitiveType, VertexMode};
pub use fan::unroll_fan_indices;
pub use layout::{
    PerVertexData, PositionColorVertex, PositionUvColorVertex, PositionVertex, VertexAttribute,
    VertexAttributeFormat, VertexAttributeSemantic, VertexLayout,
};
pub use vertices::{VerticesDescriptor, VerticesGeometry};
