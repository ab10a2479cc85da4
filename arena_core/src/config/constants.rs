//! Engine limits and defaults

use super::ConfigError;
use crate::battle::DEFAULT_MAX_DUELS;
use crate::combat::{DrawRule, DEFAULT_MAX_ROUNDS};
use crate::hero::DEFAULT_STARTING_HEALTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable arena settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub duel: DuelConstants,
    #[serde(default)]
    pub battle: BattleConstants,
    #[serde(default)]
    pub roster: RosterConstants,
}

impl ArenaConfig {
    /// Load and validate from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: ArenaConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duel.max_rounds == 0 {
            return Err(ConfigError::ValidationError(
                "duel.max_rounds must be at least 1".to_string(),
            ));
        }
        if self.battle.max_duels == 0 {
            return Err(ConfigError::ValidationError(
                "battle.max_duels must be at least 1".to_string(),
            ));
        }
        if self.roster.default_starting_health == 0 {
            return Err(ConfigError::ValidationError(
                "roster.default_starting_health must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelConstants {
    /// Exchange rounds before a duel is called a draw
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    #[serde(default)]
    pub draw_rule: DrawRule,
}

impl Default for DuelConstants {
    fn default() -> Self {
        DuelConstants {
            max_rounds: DEFAULT_MAX_ROUNDS,
            draw_rule: DrawRule::default(),
        }
    }
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Duels before a battle is called a stalemate
    #[serde(default = "default_max_duels")]
    pub max_duels: u32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            max_duels: DEFAULT_MAX_DUELS,
        }
    }
}

fn default_max_duels() -> u32 {
    DEFAULT_MAX_DUELS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConstants {
    /// Used for heroes whose roster entry has no `starting_health`
    #[serde(default = "default_starting_health")]
    pub default_starting_health: u32,
}

impl Default for RosterConstants {
    fn default() -> Self {
        RosterConstants {
            default_starting_health: DEFAULT_STARTING_HEALTH,
        }
    }
}

fn default_starting_health() -> u32 {
    DEFAULT_STARTING_HEALTH
}
