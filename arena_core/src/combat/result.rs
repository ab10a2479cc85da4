//! DuelResult - Outcome of a single duel

use serde::{Deserialize, Serialize};

/// Outcome of a duel; heroes are identified by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelResult {
    /// Surviving hero, unset on a draw
    pub winner: Option<String>,
    /// Fallen hero, unset on a draw
    pub loser: Option<String>,
    pub is_draw: bool,
    /// Exchange rounds fought (0 when the duel never started)
    pub rounds: u32,
}

impl DuelResult {
    pub fn victory(winner: impl Into<String>, loser: impl Into<String>, rounds: u32) -> Self {
        DuelResult {
            winner: Some(winner.into()),
            loser: Some(loser.into()),
            is_draw: false,
            rounds,
        }
    }

    pub fn draw(rounds: u32) -> Self {
        DuelResult {
            winner: None,
            loser: None,
            is_draw: true,
            rounds,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match (&self.winner, &self.loser) {
            (Some(winner), Some(loser)) => {
                format!("{winner} defeats {loser} in {} round(s)", self.rounds)
            }
            _ => "Draw".to_string(),
        }
    }
}
