//! Random placement helpers

use energetic_engine::foundation::math::{constants::TAU, Vec2};
use rand::Rng;

/// Uniform value in `[low, high)`; returns `low` for an empty range
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    rng.gen::<f32>() * (high - low) + low
}

/// Point uniformly distributed over the ring between `inner` and `outer`
///
/// Sampling the squared radius keeps the density uniform per unit area.
pub fn random_point_on_donut<R: Rng + ?Sized>(rng: &mut R, inner: f32, outer: f32) -> Vec2 {
    let phi = TAU * rng.gen::<f32>();
    let r = random_in_range(rng, inner * inner, outer * outer).sqrt();
    Vec2::new(r * phi.cos(), r * phi.sin())
}

/// Velocity with both components uniform in `[-limit, limit)`
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> Vec2 {
    Vec2::new(
        random_in_range(rng, -limit, limit),
        random_in_range(rng, -limit, limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_donut_points_stay_in_ring() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let point = random_point_on_donut(&mut rng, 750.0, 3000.0);
            let distance = point.magnitude();
            assert!(distance >= 750.0 - 0.01, "too close: {distance}");
            assert!(distance <= 3000.0 + 0.01, "too far: {distance}");
        }
    }

    #[test]
    fn test_velocity_components_within_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let velocity = random_velocity(&mut rng, 200.0);
            assert!(velocity.x.abs() <= 200.0 && velocity.y.abs() <= 200.0);
        }
        assert_eq!(random_velocity(&mut rng, 0.0), Vec2::zeros());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(random_point_on_donut(&mut a, 10.0, 100.0), random_point_on_donut(&mut b, 10.0, 100.0));
        }
    }
}
