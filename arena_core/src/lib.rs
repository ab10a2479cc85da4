//! arena_core - Combat resolution and team battle engine for arena heroes
//!
//! This library provides:
//! - Hero: A combatant with randomized capabilities (abilities, weapons) and armor
//! - DuelEngine: One-on-one combat resolved to a winner or draw
//! - Team: Ordered hero rosters with kill/death statistics
//! - BattleEngine: Team vs team battles built from random duels
//! - RandomSource: Injectable randomness for reproducible fights

pub mod battle;
pub mod combat;
pub mod config;
pub mod error;
pub mod hero;
pub mod prelude;
pub mod rng;
pub mod team;

// Re-export core types for convenience
pub use battle::{BattleEngine, BattleOutcome, BattleReport};
pub use combat::{BattleObserver, CombatEvent, DrawRule, DuelEngine, DuelResult, EventLog, NoopObserver};
pub use config::{ArenaConfig, ConfigError, RosterConfig};
pub use error::{ArenaError, Result};
pub use hero::{Armor, Capability, CapabilityKind, Hero};
pub use rng::{RandomSource, RngSource};
pub use team::{MemberStats, Team, TeamStats};
