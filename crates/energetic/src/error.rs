//! Game error types

use energetic_engine::config::ConfigError;

/// Errors raised while setting up or running the simulation
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration loaded but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
