//! Capability interface the collision core needs from simulated bodies
//!
//! The core never owns bodies. It borrows the caller's body slice for one
//! tick, reads kinematic state through [`Body`], and hands results back
//! through [`Body::react_on_collision`].

use std::fmt;

use crate::foundation::math::Vec2;
use super::collision::CollisionShape;

/// Identity of a body within one tick: its index in the body slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Index into the tick's body slice
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A simulated body that takes part in collision detection
pub trait Body {
    /// Simulation state passed through to reaction callbacks (score, sound hooks, spawn queues)
    type Context;

    /// Current world position
    fn position(&self) -> Vec2;

    /// Current velocity
    fn velocity(&self) -> Vec2;

    /// Integer mass; `0` marks the body as immovable during resolution
    fn mass(&self) -> i32;

    /// Restitution in `[0, 1]`
    fn restitution(&self) -> f32;

    /// Whether the body still takes part in the simulation
    fn is_alive(&self) -> bool;

    /// Collision mask, already positioned for this tick
    fn shape(&self) -> &CollisionShape;

    /// Handle a resolved collision
    ///
    /// `new_velocity` is the post-collision velocity computed for this body.
    /// The body decides what to do with it: apply it, ignore it, mark itself
    /// dead, queue spawns in `ctx`. `other` is the collision partner and may
    /// be mutated as well.
    fn react_on_collision(&mut self, new_velocity: Vec2, other: &mut Self, ctx: &mut Self::Context);

    /// Snapshot of the values the resolver reads
    fn kinematic_state(&self) -> KinematicState {
        KinematicState {
            position: self.position(),
            velocity: self.velocity(),
            mass: self.mass(),
            restitution: self.restitution(),
        }
    }
}

/// Plain kinematic values of one body at resolution time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// World position
    pub position: Vec2,
    /// Velocity
    pub velocity: Vec2,
    /// Integer mass
    pub mass: i32,
    /// Restitution in `[0, 1]`
    pub restitution: f32,
}

impl KinematicState {
    /// Create a state from its parts
    pub const fn new(position: Vec2, velocity: Vec2, mass: i32, restitution: f32) -> Self {
        Self { position, velocity, mass, restitution }
    }

    /// Linear momentum `mass * velocity`
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass as f32
    }
}

/// Borrow two distinct bodies of a slice mutably at once
///
/// Returns `None` when both ids are equal or either is out of range.
pub fn pair_mut<T>(bodies: &mut [T], a: BodyId, b: BodyId) -> Option<(&mut T, &mut T)> {
    let (i, j) = (a.index(), b.index());
    if i == j || i >= bodies.len() || j >= bodies.len() {
        return None;
    }
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_mut_returns_requested_order() {
        let mut values = vec![10, 20, 30, 40];

        let (a, b) = pair_mut(&mut values, BodyId(3), BodyId(1)).unwrap();
        assert_eq!((*a, *b), (40, 20));
        *a += 1;
        *b += 2;
        assert_eq!(values, vec![10, 22, 30, 41]);

        let (a, b) = pair_mut(&mut values, BodyId(0), BodyId(2)).unwrap();
        assert_eq!((*a, *b), (10, 30));
    }

    #[test]
    fn test_pair_mut_rejects_same_or_invalid_ids() {
        let mut values = vec![1, 2];
        assert!(pair_mut(&mut values, BodyId(1), BodyId(1)).is_none());
        assert!(pair_mut(&mut values, BodyId(0), BodyId(2)).is_none());
    }
}
