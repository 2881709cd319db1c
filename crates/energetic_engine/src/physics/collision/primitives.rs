//! Basic geometric collision primitives
//!
//! Masks store integer coordinates. Float body positions are truncated
//! toward zero when a mask is positioned.

use crate::foundation::math::{truncate_to_int, IntRect, Vec2};

/// A circular collision mask with an integer center and radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleCollider {
    /// Center x coordinate
    pub x: i32,
    /// Center y coordinate
    pub y: i32,
    /// Radius of the circle
    pub radius: i32,
}

impl CircleCollider {
    /// Creates a circle centered on the truncated `position`
    pub fn new(position: Vec2, radius: i32) -> Self {
        let (x, y) = truncate_to_int(position);
        Self { x, y, radius }
    }

    /// Creates a circle from integer coordinates
    pub const fn from_center(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    /// Recenter the circle on the truncated `position`
    pub fn update_position(&mut self, position: Vec2) {
        let (x, y) = truncate_to_int(position);
        self.x = x;
        self.y = y;
    }

    /// Square enclosing the circle (center ± radius on both axes)
    pub const fn bounding_rect(&self) -> IntRect {
        IntRect::around(self.x, self.y, self.radius)
    }

    /// Check if this circle overlaps another
    ///
    /// Touching circles count as overlapping. Evaluated on squared distances
    /// in 128-bit integers so the test is exact for any `i32` coordinates.
    pub fn intersects(&self, other: &CircleCollider) -> bool {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        let radius_sum = i128::from(self.radius) + i128::from(other.radius);
        dx * dx + dy * dy <= radius_sum * radius_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_circles_intersect() {
        let a = CircleCollider::from_center(0, 0, 5);
        let b = CircleCollider::from_center(10, 0, 5);
        assert!(a.intersects(&b));

        let c = CircleCollider::from_center(11, 0, 5);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_intersection_matches_distance_formula() {
        let reference = CircleCollider::from_center(3, -2, 7);
        for x in -25..=25 {
            for y in -25..=25 {
                for radius in [0, 1, 4, 9] {
                    let other = CircleCollider::from_center(x, y, radius);
                    let distance = (((x - 3) * (x - 3) + (y + 2) * (y + 2)) as f64).sqrt();
                    let expected = distance <= f64::from(7 + radius);
                    assert_eq!(reference.intersects(&other), expected, "at ({x}, {y}) r={radius}");
                    assert_eq!(other.intersects(&reference), expected);
                }
            }
        }
    }

    #[test]
    fn test_position_is_truncated() {
        let mut circle = CircleCollider::new(Vec2::new(4.99, -0.5), 3);
        assert_eq!((circle.x, circle.y), (4, 0));

        circle.update_position(Vec2::new(-7.8, 12.2));
        assert_eq!((circle.x, circle.y), (-7, 12));
        assert_eq!(circle.radius, 3);
    }

    #[test]
    fn test_large_coordinates_do_not_overflow() {
        let a = CircleCollider::from_center(i32::MAX - 1, 0, 1);
        let b = CircleCollider::from_center(i32::MIN + 1, 0, 1);
        assert!(!a.intersects(&b));
    }
}
