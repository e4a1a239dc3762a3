//! Math type aliases and helper functions.
//!
//! All geometry is single precision. Meshes are two dimensional, transforms
//! are full 4x4 matrices so they compose with the 3D shader transforms
//! supplied by the draw context.

pub use nalgebra;

/// Tolerance used when clamping derived texture coordinates below `1.0`.
///
/// Sampling exactly at the far texture edge flickers on some GPUs, so UVs are
/// clamped into `[0, 1 - UV_CLAMP_EPSILON]`.
pub const UV_CLAMP_EPSILON: f32 = 1e-3;

/// 2D point / vector (f32).
pub type Point = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Transform a 2D point by a 4x4 matrix.
///
/// The point is treated as `(x, y, 0, 1)`. When the resulting `w` is neither
/// zero nor one the result is divided by it.
pub fn transform_point(m: &Mat4, p: &Point) -> Point {
    let x = m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 3)];
    let y = m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 3)];
    let w = m[(3, 0)] * p.x + m[(3, 1)] * p.y + m[(3, 3)];
    if w != 0.0 && w != 1.0 {
        Point::new(x / w, y / w)
    } else {
        Point::new(x, y)
    }
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Build a scale-only 4x4 matrix.
pub fn mat4_from_scale(s: Vec3) -> Mat4 {
    Mat4::new_nonuniform_scaling(&s)
}

/// Build a right-handed orthographic projection with depth range [0, 1] (wgpu/Vulkan convention).
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / rml, 0.0,       0.0,         -(right + left) / rml,
        0.0,       2.0 / tmb, 0.0,         -(top + bottom) / tmb,
        0.0,       0.0,       -1.0 / fmn,  -near / fmn,
        0.0,       0.0,       0.0,          1.0,
    );
    result
}

/// Clamp both components of a UV into `[0, 1 - UV_CLAMP_EPSILON]`.
///
/// NaN components collapse to `0.0`.
#[inline]
pub fn clamp_uv(uv: Point) -> Point {
    let max = 1.0 - UV_CLAMP_EPSILON;
    Point::new(uv.x.max(0.0).min(max), uv.y.max(0.0).min(max))
}
