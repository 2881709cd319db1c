//! Full ticks of the energetic level

use energetic::autopilot::Autopilot;
use energetic::context::SoundCue;
use energetic::controls::{PlayerControls, Thrust};
use energetic::entities::{EntityKind, EntityTag, PlayerState};
use energetic::{GameConfig, Level};
use energetic_engine::foundation::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.spawning.initial_asteroids = 0;
    config.spawning.initial_green_asteroids = 0;
    config.spawning.interval = 1000.0;
    config
}

#[test]
fn test_autopilot_run_stays_consistent() {
    let config = GameConfig::default();
    let dt = config.simulation.timestep;
    let mut level = Level::new(&config, StdRng::seed_from_u64(2024)).unwrap();
    let mut pilot = Autopilot::new(config.simulation.fire_interval);

    let mut shots = 0;
    for _ in 0..600 {
        let controls = pilot.controls(&level, dt);
        let events = level.step(dt, &controls);
        shots += events.sounds.iter().filter(|&&cue| cue == SoundCue::Gunshot).count();
        if level.is_over() {
            break;
        }
    }

    let outcome = level.outcome();
    assert!(shots > 0);
    assert!(outcome.score >= outcome.game_time - 1e-3);
    for object in level.objects() {
        assert!(object.position.x.is_finite() && object.position.y.is_finite());
    }
    assert_eq!(level.count(EntityTag::Planet), 1);
}

#[test]
fn test_docking_delivers_pickups_to_planet() {
    let config = quiet_config();
    let dt = config.simulation.timestep;
    let mut level = Level::new(&config, StdRng::seed_from_u64(9)).unwrap();

    let player_key = level.player_key();
    if let Some(player) = level.object_mut(player_key) {
        player.position = Vec2::new(400.0, 0.0);
        player.velocity = Vec2::new(-300.0, 0.0);
        player.kind = EntityKind::Player(PlayerState {
            pickups: 3,
            ..PlayerState::default()
        });
    }

    let controls = PlayerControls {
        thrust: Thrust::Forward,
        ..PlayerControls::aiming_at(Vec2::zeros())
    };
    for _ in 0..60 {
        level.step(dt, &controls);
    }

    let player = level.player().unwrap();
    match player.kind {
        EntityKind::Player(state) => assert_eq!(state.pickups, 0),
        _ => unreachable!(),
    }
    assert!(level.planet().unwrap().energy().unwrap() > 1250.0);
    assert!(!level.is_over());
}
