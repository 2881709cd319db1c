//! Impulse-based collision response
//!
//! Computes post-collision velocities from the relative velocity along the
//! collision normal, weighted by restitution and mass. The resolver never
//! writes body state; results reach bodies only through
//! [`Body::react_on_collision`].
//!
//! Mass `0` is a sentinel for an immovable body: it gets weight `0` and its
//! partner takes the full weight `2`.

use crate::foundation::math::{normalize_or_zero, Vec2};
use super::body::{pair_mut, Body, KinematicState};
use super::pair_registry::CollisionPair;

/// Post-collision velocities for both members of a pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResponse {
    /// Collision normal pointing from the second body toward the first
    pub normal: Vec2,
    /// New velocity for the first body
    pub velocity_a: Vec2,
    /// New velocity for the second body
    pub velocity_b: Vec2,
}

/// Impulse weights `(weight_a, weight_b)` applied to each body
pub fn impulse_weights(mass_a: i32, mass_b: i32) -> (f32, f32) {
    if mass_a == 0 {
        (0.0, 2.0)
    } else if mass_b == 0 {
        (2.0, 0.0)
    } else {
        let combined_mass = (i64::from(mass_a) + i64::from(mass_b)) as f32;
        (
            2.0 * mass_b as f32 / combined_mass,
            2.0 * mass_a as f32 / combined_mass,
        )
    }
}

/// Compute the response for `a` colliding with `b`
///
/// Returns `None` when the bodies are separating or moving tangentially
/// (relative velocity along the normal `<= 0`); such pairs are not resolved.
pub fn compute_response(a: &KinematicState, b: &KinematicState) -> Option<CollisionResponse> {
    let normal = normalize_or_zero(a.position - b.position);
    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = normal.dot(&relative_velocity);

    if velocity_along_normal <= 0.0 {
        return None;
    }

    let restitution = a.restitution.min(b.restitution);
    let impulse = normal * (velocity_along_normal * restitution);
    let (weight_a, weight_b) = impulse_weights(a.mass, b.mass);

    Some(CollisionResponse {
        normal,
        velocity_a: a.velocity + impulse * weight_a,
        velocity_b: b.velocity - impulse * weight_b,
    })
}

/// Resolve one pair of the body slice, delivering both reaction callbacks
///
/// Both velocities are computed before either callback runs; `first`
/// reacts before `second`. Returns whether the pair was resolved.
pub fn resolve_pair<B: Body>(bodies: &mut [B], pair: &CollisionPair, ctx: &mut B::Context) -> bool {
    let Some((a, b)) = pair_mut(bodies, pair.first, pair.second) else {
        log::warn!("Skipping invalid collision pair {} / {}", pair.first, pair.second);
        return false;
    };

    let Some(response) = compute_response(&a.kinematic_state(), &b.kinematic_state()) else {
        log::trace!("Pair {} / {} separating, not resolved", pair.first, pair.second);
        return false;
    };

    log::trace!(
        "Resolving {} / {}: {:?} -> {:?}",
        pair.first,
        pair.second,
        response.velocity_a,
        response.velocity_b
    );

    a.react_on_collision(response.velocity_a, b, ctx);
    b.react_on_collision(response.velocity_b, a, ctx);
    true
}
