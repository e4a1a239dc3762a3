//! # RedLilium Geometry
//!
//! Turns caller-supplied vertex meshes into GPU-ready vertex and index
//! buffers for RedLilium's 2D geometry pipelines.
//!
//! ## Overview
//!
//! - [`mesh::VerticesGeometry`] - Immutable mesh; triangle fans are unrolled
//!   into triangle lists once, on construction
//! - Buffer builders packing position, position+color, or
//!   position+UV+color vertex records into a [`transient::TransientAllocator`]
//! - [`result::GeometryResult`] - What the submission stage needs to draw
//! - Coverage queries for culling and compositing
//!
//! ## Example
//!
//! ```
//! use redlilium_geometry::draw::{Entity, ViewportTarget};
//! use redlilium_geometry::mesh::{GeometryVertexType, generators};
//! use redlilium_geometry::mesh::VerticesGeometry;
//! use redlilium_geometry::rect::Rect;
//! use redlilium_geometry::transient::HostTransientBuffer;
//!
//! let geometry =
//!     VerticesGeometry::new(generators::generate_rect_fan(Rect::from_xywh(0.0, 0.0, 64.0, 64.0)))
//!         .unwrap();
//! assert_eq!(geometry.vertex_type(), GeometryVertexType::UV);
//!
//! let mut arena = HostTransientBuffer::new();
//! let result = geometry.position_buffer(&mut arena, &Entity::default(), &ViewportTarget::new(640, 480));
//! assert_eq!(result.vertex_buffer.vertex_count, 6);
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod math;
pub mod mesh;
pub mod rect;
pub mod result;
pub mod transient;

pub use color::Color;
pub use error::GeometryError;
pub use mesh::{GeometryVertexType, PrimitiveType, VertexMode, VerticesDescriptor, VerticesGeometry};
pub use rect::Rect;
pub use result::{GeometryResult, VertexBuffer};
pub use transient::{BufferView, HostTransientBuffer, TransientAllocator};

/// Geometry library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version.
pub fn init() {
    log::info!("RedLilium Geometry v{} initialized", VERSION);
}
