//! Triangle fan unrolling.
//!
//! GPUs have no fan primitive. A fan is rewritten as a triangle list by
//! producing a new index buffer; vertex attributes are never touched, so
//! colors and texture coordinates stay aligned with their positions.

use crate::math::Point;

/// Highest vertex count a 16-bit index can address.
const MAX_ADDRESSABLE_VERTICES: usize = u16::MAX as usize + 1;

/// Convert triangle fan topology into triangle list indices.
///
/// With explicit `indices`, `indices[0]` is the shared center and every
/// sliding pair after it closes one triangle. Without indices the vertices
/// themselves are fanned around vertex `0`. Fewer than three indices (or
/// vertices, in the implicit case) produce an empty list.
pub fn unroll_fan_indices(vertices: &[Point], indices: &[u16]) -> Vec<u16> {
    if !indices.is_empty() {
        if indices.len() < 3 {
            log::debug!("degenerate fan: {} indices", indices.len());
            return Vec::new();
        }

        let center = indices[0];
        let mut unrolled = Vec::with_capacity(3 * (indices.len() - 2));
        for pair in indices[1..].windows(2) {
            unrolled.extend_from_slice(&[center, pair[0], pair[1]]);
        }
        return unrolled;
    }

    if vertices.len() < 3 {
        log::debug!("degenerate fan: {} vertices", vertices.len());
        return Vec::new();
    }

    let mut count = vertices.len();
    if count > MAX_ADDRESSABLE_VERTICES {
        log::warn!(
            "fan has {} vertices but 16-bit indices reach only {}; truncating",
            count,
            MAX_ADDRESSABLE_VERTICES
        );
        count = MAX_ADDRESSABLE_VERTICES;
    }

    let mut unrolled = Vec::with_capacity(3 * (count - 2));
    // `count - 1` fits in u16 after truncation.
    for i in 1..(count - 1) as u16 {
        unrolled.extend_from_slice(&[0, i, i + 1]);
    }
    unrolled
}
