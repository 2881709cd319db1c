//! Physics module for collision detection and response
//!
//! Provides shape masks, the per-tick collision pass and impulse-based
//! resolution for circles in 2D.

pub mod body;
pub mod collision;
pub mod collision_system;
pub mod pair_registry;
pub mod resolver;

pub use body::{pair_mut, Body, BodyId, KinematicState};
pub use collision::{CircleCollider, CollisionShape, IntersectFn, IntersectionTable, ShapeKind};
pub use collision_system::{CollisionDetector, CollisionStats};
pub use pair_registry::{CollisionPair, PairRegistry};
pub use resolver::{compute_response, impulse_weights, resolve_pair, CollisionResponse};
