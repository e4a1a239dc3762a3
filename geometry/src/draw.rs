//! Draw-time collaborators supplying the shader transform.
//!
//! Buffer builders do not compute transforms themselves. They ask the
//! [`DrawContext`] of the thing being drawn for its shader transform with
//! respect to the [`RenderTarget`] the draw is recorded into.

use crate::math::{Mat4, orthographic_rh};

/// A render target a draw is recorded into.
pub trait RenderTarget {
    /// Projection mapping target pixel space to clip space.
    fn orthographic_transform(&self) -> Mat4;
}

/// Per-draw context of a drawable.
pub trait DrawContext {
    /// Transform the vertex shader applies to positions drawn into `target`.
    fn shader_transform(&self, target: &dyn RenderTarget) -> Mat4;
}

/// A pixel-sized render target with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportTarget {
    pub width: u32,
    pub height: u32,
}

impl ViewportTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl RenderTarget for ViewportTarget {
    fn orthographic_transform(&self) -> Mat4 {
        // Y flipped: pixel row 0 is the top of clip space.
        orthographic_rh(
            0.0,
            self.width.max(1) as f32,
            self.height.max(1) as f32,
            0.0,
            -1.0,
            1.0,
        )
    }
}

/// A drawable placed by a model transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    transform: Mat4,
}

impl Entity {
    pub fn new(transform: Mat4) -> Self {
        Self { transform }
    }

    /// Model transform of this entity.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(Mat4::identity())
    }
}

impl DrawContext for Entity {
    fn shader_transform(&self, target: &dyn RenderTarget) -> Mat4 {
        target.orthographic_transform() * self.transform
    }
}
