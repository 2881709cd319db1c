//! Headless energetic runner
//!
//! Usage: `energetic [config.toml|config.ron]`
//!
//! Runs the configured number of fixed-timestep ticks under the autopilot
//! and logs a summary every simulated second.

use energetic::autopilot::Autopilot;
use energetic::context::SoundCue;
use energetic::entities::EntityTag;
use energetic::{GameConfig, Level};
use energetic_engine::foundation::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let dt = config.simulation.timestep;
    let ticks_per_second = ((1.0 / dt).round() as u64).max(1);
    let mut level = Level::new(&config, StdRng::seed_from_u64(config.simulation.seed))?;
    let mut autopilot = Autopilot::new(config.simulation.fire_interval);

    let mut shots = 0usize;
    let mut hits = 0usize;

    for tick in 1..=u64::from(config.simulation.ticks) {
        let controls = autopilot.controls(&level, dt);
        let events = level.step(dt, &controls);

        for cue in &events.sounds {
            match cue {
                SoundCue::Gunshot => shots += 1,
                SoundCue::Impact => hits += 1,
            }
        }

        if tick % ticks_per_second == 0 {
            let rocks = level.count(EntityTag::Asteroid) + level.count(EntityTag::GreenAsteroid);
            log::info!(
                "t={:.0}s score={:.1} rocks={} player={:.1} planet={:.1} pairs={} shots={} hits={}",
                level.game_time(),
                level.outcome().score,
                rocks,
                level.player().and_then(|p| p.energy()).unwrap_or(0.0),
                level.planet().and_then(|p| p.energy()).unwrap_or(0.0),
                events.collisions.pairs_found,
                shots,
                hits
            );
        }

        if level.is_over() {
            break;
        }
    }

    let outcome = level.outcome();
    match outcome.end {
        Some(reason) => log::info!(
            "Game over ({:?}) after {:.1}s, score {:.1}",
            reason,
            outcome.game_time,
            outcome.score
        ),
        None => log::info!(
            "Survived {:.1}s over {} ticks, score {:.1}",
            outcome.game_time,
            outcome.ticks,
            outcome.score
        ),
    }

    Ok(())
}
