//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Heroes and teams
pub use crate::hero::{Armor, Capability, CapabilityKind, Hero};
pub use crate::team::{Team, TeamStats};

// Combat
pub use crate::battle::{BattleEngine, BattleOutcome, BattleReport};
pub use crate::combat::{BattleObserver, CombatEvent, DrawRule, DuelEngine, DuelResult, EventLog, NoopObserver};

// Randomness
pub use crate::rng::{RandomSource, RngSource};

// Config and errors
pub use crate::config::{ArenaConfig, ConfigError, RosterConfig};
pub use crate::error::ArenaError;
