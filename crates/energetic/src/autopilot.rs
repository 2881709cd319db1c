//! Scripted pilot for headless runs
//!
//! Aims at the nearest asteroid and fires on a fixed interval. Once the ship
//! carries enough pickups or runs low on energy it turns toward the planet
//! and thrusts until it docks.

use energetic_engine::foundation::math::Vec2;

use crate::controls::{PlayerControls, Thrust};
use crate::entities::EntityKind;
use crate::level::Level;

/// Pickups carried before heading home
pub const DELIVERY_PICKUPS: u32 = 3;
/// Ship energy below which the pilot heads home
pub const LOW_ENERGY: f32 = 80.0;
/// Ship energy the pilot keeps in reserve instead of firing
pub const FIRING_RESERVE: f32 = 40.0;

/// Simple scripted controller for the player ship
#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_interval: f32,
    cooldown: f32,
}

impl Autopilot {
    /// Create a pilot firing at most once every `fire_interval` seconds
    pub const fn new(fire_interval: f32) -> Self {
        Self {
            fire_interval,
            cooldown: 0.0,
        }
    }

    /// Controls for the coming tick of `dt` seconds
    pub fn controls(&mut self, level: &Level, dt: f32) -> PlayerControls {
        self.cooldown -= dt;

        let Some(player) = level.player() else {
            return PlayerControls::default();
        };
        let EntityKind::Player(state) = player.kind else {
            return PlayerControls::default();
        };

        if state.pickups >= DELIVERY_PICKUPS || state.energy < LOW_ENERGY {
            if let Some(planet) = level.planet() {
                return PlayerControls {
                    thrust: Thrust::Forward,
                    ..PlayerControls::aiming_at(planet.position)
                };
            }
        }

        let Some(target) = nearest_asteroid(level, player.position) else {
            return PlayerControls::aiming_at(player.position + Vec2::new(1.0, 0.0));
        };

        let fire = self.cooldown <= 0.0 && state.energy > FIRING_RESERVE;
        if fire {
            self.cooldown = self.fire_interval;
        }

        PlayerControls {
            fire,
            ..PlayerControls::aiming_at(target)
        }
    }
}

fn nearest_asteroid(level: &Level, from: Vec2) -> Option<Vec2> {
    level
        .objects()
        .iter()
        .filter(|object| object.alive && object.kind.is_asteroid())
        .map(|object| object.position)
        .min_by(|a, b| (a - from).norm_squared().total_cmp(&(b - from).norm_squared()))
}
