//! Math utilities and types
//!
//! Provides the 2D vector type used by bodies and the integer rectangle
//! used by the quadtree and collision masks. World coordinates follow
//! screen convention: `x` grows to the right, `y` grows downward.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned integer rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRect {
    /// Left edge (smallest x)
    pub left: i32,
    /// Top edge (smallest y)
    pub top: i32,
    /// Width in world units
    pub width: i32,
    /// Height in world units
    pub height: i32,
}

impl IntRect {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Create the square that encloses a circle of `radius` around `center`
    ///
    /// Edges saturate at the `i32` range.
    pub const fn around(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            left: center_x.saturating_sub(radius),
            top: center_y.saturating_sub(radius),
            width: radius.saturating_mul(2),
            height: radius.saturating_mul(2),
        }
    }

    /// Right edge (`left + width`, saturating)
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (`top + height`, saturating)
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Vertical midline, rounded toward the left edge
    pub const fn vertical_midpoint(&self) -> i32 {
        self.left + self.width / 2
    }

    /// Horizontal midline, rounded toward the top edge
    pub const fn horizontal_midpoint(&self) -> i32 {
        self.top + self.height / 2
    }

    /// Whether a point lies inside the rectangle (right and bottom edges exclusive)
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Normalize a vector, returning the zero vector when its length is zero
///
/// Coincident body positions produce a zero-length collision normal; this
/// keeps the resolver running with a zero impulse direction instead of
/// producing NaNs.
pub fn normalize_or_zero(vector: Vec2) -> Vec2 {
    let length = vector.magnitude();
    if length != 0.0 {
        vector / length
    } else {
        Vec2::zeros()
    }
}

/// Truncate a float position toward zero into integer mask coordinates
pub fn truncate_to_int(position: Vec2) -> (i32, i32) {
    (position.x as i32, position.y as i32)
}

/// Rotate a vector by `degrees` (clockwise on screen, since `y` points down)
pub fn rotate(vector: Vec2, degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    Vec2::new(
        vector.x * cos - vector.y * sin,
        vector.x * sin + vector.y * cos,
    )
}

/// Angle of a vector against the positive x axis in degrees, in `[0, 360)`
pub fn angle_degrees(vector: Vec2) -> f32 {
    let angle = vector.y.atan2(vector.x).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;
}
