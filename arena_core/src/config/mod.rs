//! Configuration loading from TOML files

mod constants;
mod roster;

pub use constants::{ArenaConfig, BattleConstants, DuelConstants, RosterConstants};
pub use roster::{default_roster, load_roster, parse_roster, GearConfig, HeroConfig, RosterConfig, TeamConfig};

use crate::error::ArenaError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Invalid roster entry: {0}")]
    Arena(#[from] ArenaError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
