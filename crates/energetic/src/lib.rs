//! # Energetic
//!
//! Headless simulation of the energetic arcade level: a player ship
//! defending a planet against an asteroid field, built on the collision
//! core in `energetic_engine`.

#![warn(missing_docs)]

pub mod autopilot;
pub mod config;
pub mod context;
pub mod controls;
pub mod entities;
pub mod error;
pub mod level;
pub mod random;
pub mod reactions;

pub use config::GameConfig;
pub use error::GameError;
pub use level::{EndReason, Level, LevelOutcome, TickEvents};
