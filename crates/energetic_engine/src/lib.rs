//! # Energetic Engine
//!
//! Collision core for 2D arcade simulations.
//!
//! ## Features
//!
//! - **Quadtree Broad Phase**: Fixed-bounds quadtree rebuilt every tick
//! - **Shape Dispatch**: Pairwise intersection tests keyed by shape kind
//! - **Pair Deduplication**: Each overlapping pair resolved once per tick
//! - **Impulse Response**: Restitution and mass weighted velocity exchange
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use energetic_engine::prelude::*;
//!
//! struct Ball {
//!     position: Vec2,
//!     velocity: Vec2,
//!     shape: CollisionShape,
//! }
//!
//! impl Body for Ball {
//!     type Context = ();
//!
//!     fn position(&self) -> Vec2 { self.position }
//!     fn velocity(&self) -> Vec2 { self.velocity }
//!     fn mass(&self) -> i32 { 10 }
//!     fn restitution(&self) -> f32 { 1.0 }
//!     fn is_alive(&self) -> bool { true }
//!     fn shape(&self) -> &CollisionShape { &self.shape }
//!
//!     fn react_on_collision(&mut self, new_velocity: Vec2, _other: &mut Self, _ctx: &mut ()) {
//!         self.velocity = new_velocity;
//!     }
//! }
//!
//! let world = IntRect::new(-1000, -1000, 2000, 2000);
//! let mut detector = CollisionDetector::new(world, QuadtreeConfig::default());
//! let mut balls: Vec<Ball> = Vec::new();
//! detector.detect_collisions(&mut balls, &mut ());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{IntRect, Vec2},
        physics::{
            Body, BodyId, CircleCollider, CollisionDetector, CollisionPair, CollisionShape,
            CollisionStats, IntersectionTable, ShapeKind,
        },
        spatial::{Quadtree, QuadtreeConfig},
    };
}
