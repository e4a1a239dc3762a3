//! Shared fixtures for geometry integration tests.

use redlilium_geometry::math::Point;
use redlilium_geometry::mesh::{VertexMode, VerticesDescriptor, VerticesGeometry};
use redlilium_geometry::transient::{BufferView, HostTransientBuffer};
use redlilium_geometry::{Color, Rect};

/// Initialize logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Which buffer builder a test exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    Position,
    PositionColor,
    PositionUvColor,
}

impl Builder {
    /// Size of one packed vertex record.
    pub fn stride(self) -> usize {
        match self {
            Builder::Position => 8,
            Builder::PositionColor => 24,
            Builder::PositionUvColor => 32,
        }
    }
}

/// A 2x3 grid of points: 0 1 2 on top, 3 4 5 below, 10 units apart.
pub fn grid_vertices() -> Vec<Point> {
    (0..6)
        .map(|i| Point::new((i % 3) as f32 * 10.0, (i / 3) as f32 * 10.0))
        .collect()
}

pub fn grid_bounds() -> Rect {
    Rect::from_ltrb(0.0, 0.0, 20.0, 10.0)
}

/// A grid mesh in `mode`, optionally indexed, with per-vertex colors.
pub fn grid_geometry(mode: VertexMode, indices: Vec<u16>) -> VerticesGeometry {
    let colors = (0..6)
        .map(|i| Color::new(i as f32 / 5.0, 0.0, 0.0, 1.0))
        .collect();
    VerticesGeometry::new(
        VerticesDescriptor::new(grid_vertices(), grid_bounds())
            .with_indices(indices)
            .with_colors(colors)
            .with_vertex_mode(mode),
    )
    .unwrap()
}

/// Decode the 16-bit indices behind `view`.
pub fn read_indices(arena: &HostTransientBuffer, view: &BufferView) -> Vec<u16> {
    arena
        .bytes(view)
        .chunks_exact(2)
        .map(bytemuck::pod_read_unaligned)
        .collect()
}

/// Decode the fixed-stride records behind `view`.
pub fn read_records<T: bytemuck::Pod>(arena: &HostTransientBuffer, view: &BufferView) -> Vec<T> {
    arena
        .bytes(view)
        .chunks_exact(size_of::<T>())
        .map(bytemuck::pod_read_unaligned)
        .collect()
}
