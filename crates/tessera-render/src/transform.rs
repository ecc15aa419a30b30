//! 2D affine transforms.
//!
//! Widgets draw in their own local coordinates. The render context keeps a
//! [`Transform2D`] that accumulates every ancestor's local offset, so a
//! widget only ever composes its own translation onto what it inherited.

use glam::{Affine2, Vec2};

use crate::types::{Point, Rect};

/// A 2D affine transformation, backed by [`glam::Affine2`].
///
/// ```
/// use tessera_render::{Point, Transform2D};
///
/// let t = Transform2D::translate(10.0, 0.0).translated(5.0, 2.0);
/// assert_eq!(t.transform_point(Point::new(1.0, 1.0)), Point::new(16.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D(Affine2);

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine2::IDENTITY);

    /// Create a translation transform.
    #[inline]
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self(Affine2::from_translation(Vec2::new(tx, ty)))
    }

    /// Compose a local translation onto this transform. The translation is
    /// applied before `self`.
    #[inline]
    pub fn translated(&self, tx: f32, ty: f32) -> Self {
        Self(self.0 * Affine2::from_translation(Vec2::new(tx, ty)))
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        self.0.transform_point2(p.to_vec2()).into()
    }

    /// Transform a rectangle and return its axis-aligned bounding box.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let corners = [
            rect.top_left(),
            rect.bottom_right(),
            Point::new(rect.right(), rect.top()),
            Point::new(rect.left(), rect.bottom()),
        ]
        .map(|corner| self.0.transform_point2(corner.to_vec2()));

        let min = corners.iter().copied().reduce(Vec2::min).unwrap_or(Vec2::ZERO);
        let max = corners.iter().copied().reduce(Vec2::max).unwrap_or(Vec2::ZERO);
        Rect::from_corners(min.into(), max.into())
    }

    /// The translation component.
    #[inline]
    pub fn translation(&self) -> Point {
        self.0.translation.into()
    }
}
