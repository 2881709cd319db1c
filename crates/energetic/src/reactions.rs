//! Per-kind responses to resolved collisions
//!
//! The resolver hands each member of a pair its post-collision velocity.
//! What happens next depends on both kinds: rocks bounce, the planet and
//! the ship lose energy, projectiles and pickups are consumed.

use energetic_engine::foundation::math::Vec2;

use crate::context::{SimulationContext, SoundCue};
use crate::entities::{EntityKind, GameObject, PLAYER_MAX_ENERGY, PLAYER_MAX_PICKUPS};

/// Energy the planet or ship loses per asteroid hit
pub const ASTEROID_HIT_COST: f32 = 30.0;
/// Planet energy granted per delivered pickup
pub const PICKUP_ENERGY: f32 = 100.0;
/// Score for shooting an asteroid
pub const ASTEROID_SCORE: f32 = 5.0;

/// Apply the reaction of `this` to colliding with `other`
pub fn react(this: &mut GameObject, new_velocity: Vec2, other: &mut GameObject, ctx: &mut SimulationContext) {
    let other_is_asteroid = other.kind.is_asteroid();
    let this_is_green = matches!(this.kind, EntityKind::GreenAsteroid);

    match (&mut this.kind, &mut other.kind) {
        (EntityKind::Asteroid | EntityKind::GreenAsteroid, EntityKind::Projectile(_)) => {
            this.alive = false;
            if this_is_green {
                ctx.queue_spawn(GameObject::pickup(this.position));
            }
        }
        (
            EntityKind::Asteroid | EntityKind::GreenAsteroid,
            EntityKind::Asteroid | EntityKind::GreenAsteroid | EntityKind::Planet(_) | EntityKind::Player(_),
        ) => {
            this.velocity = new_velocity;
        }

        (EntityKind::Planet(planet), _) if other_is_asteroid => {
            planet.energy -= ASTEROID_HIT_COST;
            if planet.energy <= 0.0 {
                planet.energy = 0.0;
                this.alive = false;
                log::info!("Planet destroyed by asteroid impact");
            }
        }

        (EntityKind::Player(player), _) if other_is_asteroid => {
            this.velocity = new_velocity;
            player.energy -= ASTEROID_HIT_COST;
            if player.energy <= 0.0 {
                player.energy = 0.0;
                this.alive = false;
                log::info!("Player destroyed by asteroid impact");
            }
        }
        (EntityKind::Player(player), EntityKind::Pickup) => {
            if player.pickups < PLAYER_MAX_PICKUPS {
                player.pickups += 1;
            }
        }
        (EntityKind::Player(player), EntityKind::Planet(planet)) => {
            planet.energy += player.pickups as f32 * PICKUP_ENERGY;
            player.pickups = 0;
            let refill = PLAYER_MAX_ENERGY - player.energy.trunc();
            player.energy += refill;
            planet.energy -= refill;
            log::debug!("Player docked: planet energy now {:.1}", planet.energy);
        }

        (EntityKind::Projectile(_), _) if other_is_asteroid => {
            ctx.play_sound(SoundCue::Impact);
            ctx.add_explosion(this.position);
            ctx.add_score(ASTEROID_SCORE);
            this.alive = false;
        }
        (EntityKind::Projectile(_), EntityKind::Projectile(_)) => {
            this.alive = false;
        }

        (EntityKind::Pickup, _) => {
            this.alive = false;
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WorldBounds;
    use crate::entities::{PlanetState, PlayerState, PLANET_ENERGY};

    fn context() -> SimulationContext {
        SimulationContext::new(WorldBounds::centered(3000.0))
    }

    fn player_with(energy: f32, pickups: u32) -> GameObject {
        let mut player = GameObject::player(Vec2::zeros());
        player.kind = EntityKind::Player(PlayerState {
            energy,
            pickups,
            ..PlayerState::default()
        });
        player
    }

    #[test]
    fn test_asteroids_take_new_velocity() {
        let mut ctx = context();
        let mut a = GameObject::asteroid(Vec2::zeros(), Vec2::new(10.0, 0.0));
        let mut b = GameObject::green_asteroid(Vec2::new(90.0, 0.0), Vec2::zeros());

        react(&mut a, Vec2::new(-5.0, 1.0), &mut b, &mut ctx);
        assert_eq!(a.velocity, Vec2::new(-5.0, 1.0));
        assert!(a.alive);
        assert!(ctx.drain_spawns().is_empty());
    }

    #[test]
    fn test_shot_green_asteroid_leaves_pickup() {
        let mut ctx = context();
        let mut green = GameObject::green_asteroid(Vec2::new(40.0, 60.0), Vec2::zeros());
        let mut shot = GameObject::projectile(Vec2::new(40.0, 0.0), Vec2::new(0.0, 1.0));

        react(&mut green, Vec2::zeros(), &mut shot, &mut ctx);
        assert!(!green.alive);
        let spawns = ctx.drain_spawns();
        assert_eq!(spawns.len(), 1);
        assert!(matches!(spawns[0].kind, EntityKind::Pickup));
        assert_eq!(spawns[0].position, Vec2::new(40.0, 60.0));

        let mut plain = GameObject::asteroid(Vec2::zeros(), Vec2::zeros());
        react(&mut plain, Vec2::zeros(), &mut shot, &mut ctx);
        assert!(!plain.alive);
        assert!(ctx.drain_spawns().is_empty());
    }

    #[test]
    fn test_projectile_hit_scores_and_explodes() {
        let mut ctx = context();
        let mut shot = GameObject::projectile(Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0));
        let mut rock = GameObject::asteroid(Vec2::new(50.0, 5.0), Vec2::zeros());

        react(&mut shot, Vec2::zeros(), &mut rock, &mut ctx);
        assert!(!shot.alive);
        assert_eq!(ctx.score(), ASTEROID_SCORE);
        assert_eq!(ctx.take_sound_cues(), vec![SoundCue::Impact]);
        let explosions = ctx.take_explosions();
        assert_eq!(explosions.len(), 1);
        assert_eq!(explosions[0].position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_projectiles_cancel_each_other() {
        let mut ctx = context();
        let mut a = GameObject::projectile(Vec2::zeros(), Vec2::new(1.0, 0.0));
        let mut b = GameObject::projectile(Vec2::new(15.0, 0.0), Vec2::new(-1.0, 0.0));
        react(&mut a, Vec2::zeros(), &mut b, &mut ctx);
        assert!(!a.alive);
        assert_eq!(ctx.score(), 0.0);
    }

    #[test]
    fn test_planet_loses_energy_to_asteroids() {
        let mut ctx = context();
        let mut planet = GameObject::planet(Vec2::zeros());
        let mut rock = GameObject::asteroid(Vec2::new(180.0, 0.0), Vec2::new(-100.0, 0.0));

        react(&mut planet, Vec2::new(1.0, 0.0), &mut rock, &mut ctx);
        assert_eq!(planet.energy(), Some(PLANET_ENERGY - ASTEROID_HIT_COST));
        assert_eq!(planet.velocity, Vec2::zeros());

        planet.kind = EntityKind::Planet(PlanetState { energy: 20.0 });
        react(&mut planet, Vec2::zeros(), &mut rock, &mut ctx);
        assert_eq!(planet.energy(), Some(0.0));
        assert!(!planet.alive);
    }

    #[test]
    fn test_player_hit_by_asteroid() {
        let mut ctx = context();
        let mut player = player_with(100.0, 2);
        let mut rock = GameObject::asteroid(Vec2::new(70.0, 0.0), Vec2::zeros());

        react(&mut player, Vec2::new(-40.0, 0.0), &mut rock, &mut ctx);
        assert_eq!(player.velocity, Vec2::new(-40.0, 0.0));
        assert_eq!(player.energy(), Some(70.0));
        assert!(player.alive);

        let mut weak = player_with(10.0, 0);
        react(&mut weak, Vec2::zeros(), &mut rock, &mut ctx);
        assert_eq!(weak.energy(), Some(0.0));
        assert!(!weak.alive);
    }

    #[test]
    fn test_pickups_are_collected_up_to_limit() {
        let mut ctx = context();
        let mut player = player_with(200.0, PLAYER_MAX_PICKUPS - 1);
        let mut pickup = GameObject::pickup(Vec2::new(40.0, 0.0));

        react(&mut player, Vec2::zeros(), &mut pickup, &mut ctx);
        react(&mut pickup, Vec2::zeros(), &mut player, &mut ctx);
        assert!(!pickup.alive);

        let mut second = GameObject::pickup(Vec2::new(40.0, 0.0));
        react(&mut player, Vec2::zeros(), &mut second, &mut ctx);
        match player.kind {
            EntityKind::Player(state) => assert_eq!(state.pickups, PLAYER_MAX_PICKUPS),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_docking_transfers_pickups_and_refills() {
        let mut ctx = context();
        let mut player = player_with(200.5, 3);
        let mut planet = GameObject::planet(Vec2::zeros());
        let velocity_before = player.velocity;

        react(&mut player, Vec2::new(50.0, 50.0), &mut planet, &mut ctx);

        // 3 pickups deliver 300; refill of 255 - 200 = 55 is paid by the planet
        assert_eq!(planet.energy(), Some(PLANET_ENERGY + 300.0 - 55.0));
        assert_eq!(player.energy(), Some(255.5));
        assert_eq!(player.velocity, velocity_before);
        match player.kind {
            EntityKind::Player(state) => assert_eq!(state.pickups, 0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_unrelated_pairs_are_ignored() {
        let mut ctx = context();
        let mut planet = GameObject::planet(Vec2::zeros());
        let mut player = player_with(100.0, 0);
        react(&mut planet, Vec2::new(3.0, 3.0), &mut player, &mut ctx);
        assert_eq!(planet.energy(), Some(PLANET_ENERGY));
        assert!(planet.alive);

        let mut shot = GameObject::projectile(Vec2::zeros(), Vec2::new(1.0, 0.0));
        let velocity = shot.velocity;
        react(&mut shot, Vec2::zeros(), &mut player, &mut ctx);
        assert!(shot.alive);
        assert_eq!(shot.velocity, velocity);
    }
}
