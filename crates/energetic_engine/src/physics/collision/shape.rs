//! High-level collision shape abstraction
//!
//! A [`CollisionShape`] is the mask a body owns. Pairwise tests are not
//! written as methods on each variant; they are looked up in an
//! [`IntersectionTable`](super::dispatch::IntersectionTable) keyed by the
//! pair of [`ShapeKind`]s.

use crate::foundation::math::{IntRect, Vec2};
use super::dispatch::IntersectionTable;
use super::primitives::CircleCollider;

/// Discriminant of a [`CollisionShape`], used as the dispatch table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// [`CollisionShape::Circle`]
    Circle,
}

impl ShapeKind {
    /// Number of shape kinds (dispatch table dimension)
    pub const COUNT: usize = 1;

    /// Every kind, in table order
    pub const ALL: [ShapeKind; Self::COUNT] = [ShapeKind::Circle];

    /// Row/column of this kind in the dispatch table
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Collision mask owned by a single body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionShape {
    /// A circle with integer center and radius
    Circle(CircleCollider),
}

impl CollisionShape {
    /// Creates a circular mask centered on the truncated `position`
    pub fn circle(position: Vec2, radius: i32) -> Self {
        Self::Circle(CircleCollider::new(position, radius))
    }

    /// Variant discriminant
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Recenter the mask on the owning body's position
    pub fn update_position(&mut self, position: Vec2) {
        match self {
            Self::Circle(circle) => circle.update_position(position),
        }
    }

    /// Integer center of the mask
    pub const fn center(&self) -> (i32, i32) {
        match self {
            Self::Circle(circle) => (circle.x, circle.y),
        }
    }

    /// Radius of the smallest circle around the center enclosing the mask
    pub const fn radius(&self) -> i32 {
        match self {
            Self::Circle(circle) => circle.radius,
        }
    }

    /// Axis-aligned extent of the mask, used by the quadtree
    pub const fn bounding_rect(&self) -> IntRect {
        match self {
            Self::Circle(circle) => circle.bounding_rect(),
        }
    }

    /// Test if this shape overlaps another using the standard dispatch table
    pub fn intersects(&self, other: &CollisionShape) -> bool {
        IntersectionTable::STANDARD.test(self, other)
    }
}

impl From<CircleCollider> for CollisionShape {
    fn from(circle: CircleCollider) -> Self {
        Self::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_shape_kind_and_bounds() {
        let shape = CollisionShape::circle(Vec2::new(10.7, -4.2), 6);
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.center(), (10, -4));
        assert_eq!(shape.bounding_rect(), IntRect::new(4, -10, 12, 12));
    }

    #[test]
    fn test_update_then_intersect_matches_direct_construction() {
        let reference = CollisionShape::circle(Vec2::new(0.0, 0.0), 20);
        let mut moving = CollisionShape::circle(Vec2::new(500.0, 500.0), 10);

        for step in -80..=80 {
            let p = Vec2::new(step as f32 * 0.75, step as f32 * -0.4);
            moving.update_position(p);
            let direct = CollisionShape::circle(p, 10);
            assert_eq!(moving.intersects(&reference), direct.intersects(&reference));
            assert_eq!(moving, direct);
        }
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = CollisionShape::circle(Vec2::new(0.0, 0.0), 6);
        let b = CollisionShape::circle(Vec2::new(10.0, 0.0), 6);
        let c = CollisionShape::circle(Vec2::new(30.0, 0.0), 6);
        assert!(a.intersects(&b) && b.intersects(&a));
        assert!(!a.intersects(&c) && !c.intersects(&a));
    }
}
