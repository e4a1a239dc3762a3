//! Axis-aligned rectangles used for coverage queries.

use crate::math::{Mat4, Point, Vec3, mat4_from_scale, transform_point};

/// An axis-aligned rectangle stored as left/top/right/bottom edges.
///
/// Y grows downwards, so `top <= bottom` for a non-empty rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_ltrb(x, y, x + width, y + height)
    }

    /// Bounding rectangle of a sequence of points.
    ///
    /// Returns `None` for an empty sequence.
    pub fn point_bounds<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_ltrb(first.x, first.y, first.x, first.y);
        for p in points {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x);
            bounds.bottom = bounds.bottom.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// A rectangle is empty when it has no positive area (or a NaN edge).
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    /// The four corners, clockwise from top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Bounds of this rectangle after transforming its corners.
    pub fn transform_bounds(&self, transform: &Mat4) -> Self {
        let corners = self.corners().map(|c| transform_point(transform, &c));
        // Four corners are always present.
        Self::point_bounds(corners.iter()).unwrap_or_default()
    }

    /// Transform mapping this rectangle onto the unit square.
    ///
    /// `(left, top)` maps to `(0, 0)` and `(right, bottom)` to `(1, 1)`. Empty
    /// rectangles, and rectangles whose scale underflows or overflows, map
    /// every point to the origin instead.
    pub fn normalizing_transform(&self) -> Mat4 {
        if !self.is_empty() {
            let sx = 1.0 / self.width();
            let sy = 1.0 / self.height();
            let tx = -self.left * sx;
            let ty = -self.top * sy;

            if sx != 0.0 && sy != 0.0 && [sx, sy, tx, ty].iter().all(|v| v.is_finite()) {
                #[rustfmt::skip]
                let result = Mat4::new(
                    sx,  0.0, 0.0, tx,
                    0.0, sy,  0.0, ty,
                    0.0, 0.0, 1.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                );
                return result;
            }
        }

        mat4_from_scale(Vec3::new(0.0, 0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat4_from_translation;

    #[test]
    fn point_bounds_empty() {
        let points: Vec<Point> = Vec::new();
        assert_eq!(Rect::point_bounds(&points), None);
    }

    #[test]
    fn point_bounds_covers_all_points() {
        let points = [
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ];
        let bounds = Rect::point_bounds(&points).unwrap();
        assert_eq!(bounds, Rect::from_ltrb(-2.0, -1.0, 3.0, 4.0));
    }

    #[test]
    fn single_point_bounds_is_degenerate() {
        let bounds = Rect::point_bounds(&[Point::new(1.0, 2.0)]).unwrap();
        assert_eq!(bounds, Rect::from_ltrb(1.0, 2.0, 1.0, 2.0));
        assert!(bounds.is_empty());
    }

    #[test]
    fn transform_bounds_translate() {
        let rect = Rect::from_xywh(0.0, 0.0, 10.0, 20.0);
        let m = mat4_from_translation(Vec3::new(5.0, -5.0, 0.0));
        assert_eq!(
            rect.transform_bounds(&m),
            Rect::from_ltrb(5.0, -5.0, 15.0, 15.0)
        );
    }

    #[test]
    fn transform_bounds_negative_scale_reorders_edges() {
        let rect = Rect::from_ltrb(1.0, 2.0, 3.0, 4.0);
        let m = mat4_from_scale(Vec3::new(-1.0, -1.0, 1.0));
        assert_eq!(
            rect.transform_bounds(&m),
            Rect::from_ltrb(-3.0, -4.0, -1.0, -2.0)
        );
    }

    #[test]
    fn normalizing_transform_maps_to_unit_square() {
        let rect = Rect::from_ltrb(10.0, 20.0, 30.0, 60.0);
        let m = rect.normalizing_transform();
        let tl = transform_point(&m, &Point::new(10.0, 20.0));
        let br = transform_point(&m, &Point::new(30.0, 60.0));
        let mid = transform_point(&m, &Point::new(20.0, 40.0));
        assert!((tl - Point::new(0.0, 0.0)).norm() < 1e-6);
        assert!((br - Point::new(1.0, 1.0)).norm() < 1e-6);
        assert!((mid - Point::new(0.5, 0.5)).norm() < 1e-6);
    }

    #[test]
    fn normalizing_transform_of_empty_rect_collapses() {
        let rect = Rect::from_ltrb(5.0, 5.0, 5.0, 10.0);
        let m = rect.normalizing_transform();
        let p = transform_point(&m, &Point::new(123.0, -4.0));
        assert_eq!(p, Point::new(0.0, 0.0));
    }
}
