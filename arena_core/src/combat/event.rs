//! Combat events and observers
//!
//! The engines report progress to a [`BattleObserver`] so a front end can
//! narrate fights. Observation never affects the outcome.

use serde::{Deserialize, Serialize};

/// Something that happened during a duel or battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    /// A hero took a hit (possibly fully blocked)
    HealthChanged { hero: String, current_health: i64 },
    DuelWon { winner: String, loser: String, rounds: u32 },
    DuelDrawn { first: String, second: String },
    BattleFinished { team_a: String, team_b: String, duels: u32 },
}

/// Receiver for combat events
pub trait BattleObserver {
    fn on_event(&mut self, event: &CombatEvent);
}

impl<F: FnMut(&CombatEvent)> BattleObserver for F {
    fn on_event(&mut self, event: &CombatEvent) {
        self(event)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BattleObserver for NoopObserver {
    fn on_event(&mut self, _event: &CombatEvent) {}
}

/// Observer that records every event in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable narration, one line per event
    pub fn narrate(&self) -> Vec<String> {
        self.events.iter().map(CombatEvent::describe).collect()
    }
}

impl BattleObserver for EventLog {
    fn on_event(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }
}

impl CombatEvent {
    /// One-line description of the event
    pub fn describe(&self) -> String {
        match self {
            CombatEvent::HealthChanged { hero, current_health } => {
                format!("{hero} has {current_health} health!")
            }
            CombatEvent::DuelWon { winner, .. } => format!("{winner} wins!"),
            CombatEvent::DuelDrawn { .. } => "Draw".to_string(),
            CombatEvent::BattleFinished { team_a, team_b, duels } => {
                format!("Battle between {team_a} and {team_b} finished after {duels} duel(s)")
            }
        }
    }
}
