//! Descriptor generators for common fan-shaped meshes.
//!
//! These produce [`VerticesDescriptor`]s in [`VertexMode::TriangleFan`]
//! topology, ready for [`VerticesGeometry::new`](super::VerticesGeometry::new).

use std::f32::consts::PI;

use crate::math::Point;
use crate::rect::Rect;

use super::data::VertexMode;
use super::vertices::VerticesDescriptor;

/// Generate a rectangle as a four-vertex fan.
///
/// Texture coordinates go from (0,0) at top-left to (1,1) at bottom-right.
pub fn generate_rect_fan(rect: Rect) -> VerticesDescriptor {
    let uvs = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];

    VerticesDescriptor::new(rect.corners().to_vec(), rect)
        .with_texture_coordinates(uvs)
        .with_vertex_mode(VertexMode::TriangleFan)
}

/// Generate a filled circle as a fan around its center.
///
/// The center is vertex 0, followed by `segments` rim vertices and a final
/// vertex closing the rim. Fewer than 3 segments are clamped to 3.
///
/// # Arguments
///
/// * `center` - Circle center
/// * `radius` - Circle radius
/// * `segments` - Number of rim segments
pub fn generate_circle_fan(center: Point, radius: f32, segments: u32) -> VerticesDescriptor {
    let segments = segments.max(3);
    let angle_increment = 2.0 * PI / segments as f32;

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(center);
    for i in 0..=segments {
        // Close the rim exactly on the first rim vertex.
        let angle = (i % segments) as f32 * angle_increment;
        vertices.push(center + Point::new(angle.cos(), angle.sin()) * radius);
    }

    let bounds = Rect::from_ltrb(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    );

    VerticesDescriptor::new(vertices, bounds).with_vertex_mode(VertexMode::TriangleFan)
}
