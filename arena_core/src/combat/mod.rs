//! Combat - One-on-one duel resolution and round-by-round events

mod duel;
mod event;
mod result;

pub use duel::{DrawRule, DuelEngine, DEFAULT_MAX_ROUNDS};
pub use event::{BattleObserver, CombatEvent, EventLog, NoopObserver};
pub use result::DuelResult;
