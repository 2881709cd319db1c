//! Collision shapes and narrow-phase testing
//!
//! # Module Organization
//!
//! - [`primitives`] - Concrete geometric masks (circles)
//! - [`shape`] - The tagged [`CollisionShape`] a body owns
//! - [`dispatch`] - Pairwise test table keyed by shape kind
//!
//! Masks live in world space with integer coordinates and are recentered by
//! their owning body every tick before any query runs against them.

pub mod primitives;
pub mod shape;
pub mod dispatch;

// Re-export commonly used types
pub use primitives::CircleCollider;
pub use shape::{CollisionShape, ShapeKind};
pub use dispatch::{IntersectFn, IntersectionTable};
