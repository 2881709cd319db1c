//! Game configuration

use energetic_engine::config::Config;
use energetic_engine::spatial::QuadtreeConfig;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// World settings
    pub world: WorldConfig,

    /// Asteroid field settings
    pub spawning: SpawnConfig,

    /// Simulation loop settings
    pub simulation: SimulationConfig,

    /// Broad-phase settings
    pub quadtree: QuadtreeConfig,
}

/// World configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Radius of the playable circle around the origin
    pub radius: f32,

    /// Width of the area around the player kept clear of new spawns
    pub view_width: i32,

    /// Height of the area around the player kept clear of new spawns
    pub view_height: i32,
}

/// Asteroid spawning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Plain asteroids placed at level start
    pub initial_asteroids: u32,

    /// Green asteroids placed at level start
    pub initial_green_asteroids: u32,

    /// Seconds between spawned asteroids
    pub interval: f32,

    /// Share of spawned asteroids that are green (0.0 - 1.0)
    pub green_share: f64,

    /// Velocity component limit before `speedup_after`
    pub initial_speed: f32,

    /// Velocity component limit after `speedup_after`
    pub late_speed: f32,

    /// Game time in seconds after which spawns use `late_speed`
    pub speedup_after: f32,

    /// Attempts to place a spawn outside the player's view
    pub placement_attempts: u32,
}

/// Simulation loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed timestep in seconds
    pub timestep: f32,

    /// Ticks run by the headless runner
    pub ticks: u32,

    /// Seed for all level randomness
    pub seed: u64,

    /// Seconds between autopilot shots
    pub fire_interval: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius: 3000.0,
            view_width: 1280,
            view_height: 720,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_asteroids: 80,
            initial_green_asteroids: 10,
            interval: 2.0,
            green_share: 0.3,
            initial_speed: 200.0,
            late_speed: 400.0,
            speedup_after: 30.0,
            placement_attempts: 10,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            ticks: 60 * 120,
            seed: 0x00E4_E2C1,
            fire_interval: 0.25,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.world.radius.is_finite() && self.world.radius > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "world.radius must be positive, got {}",
                self.world.radius
            )));
        }
        if self.world.view_width < 0 || self.world.view_height < 0 {
            return Err(GameError::InvalidConfig(
                "world view size must not be negative".to_string(),
            ));
        }
        if !(self.simulation.timestep.is_finite() && self.simulation.timestep > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "simulation.timestep must be positive, got {}",
                self.simulation.timestep
            )));
        }
        if !(self.spawning.interval.is_finite() && self.spawning.interval > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "spawning.interval must be positive, got {}",
                self.spawning.interval
            )));
        }
        if !(0.0..=1.0).contains(&self.spawning.green_share) {
            return Err(GameError::InvalidConfig(format!(
                "spawning.green_share must be within [0, 1], got {}",
                self.spawning.green_share
            )));
        }
        if self.spawning.initial_speed < 0.0 || self.spawning.late_speed < 0.0 {
            return Err(GameError::InvalidConfig(
                "spawning speeds must not be negative".to_string(),
            ));
        }
        if self.quadtree.max_objects == 0 {
            return Err(GameError::InvalidConfig(
                "quadtree.max_objects must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration file, using defaults when it is missing
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, GameError> {
        let config = Self::load_or_default(path)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.radius, 3000.0);
        assert_eq!(config.spawning.initial_asteroids, 80);
        assert_eq!(config.quadtree.max_objects, 10);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let text = "[spawning]\ninitial_asteroids = 3\n\n[quadtree]\nmax_levels = 2\n";
        let config = GameConfig::from_toml_str(text).unwrap();
        assert_eq!(config.spawning.initial_asteroids, 3);
        assert_eq!(config.spawning.interval, 2.0);
        assert_eq!(config.quadtree.max_levels, 2);
        assert_eq!(config.quadtree.max_objects, 10);
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = GameConfig::default();
        config.simulation.seed = 7;
        let text = config.to_ron_string().unwrap();
        assert_eq!(GameConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = GameConfig::default();
        config.world.radius = 0.0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.spawning.green_share = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.simulation.timestep = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
