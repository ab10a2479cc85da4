//! BattleReport - Outcome of a team battle

use serde::{Deserialize, Serialize};

/// Which side carried the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    TeamAWins,
    TeamBWins,
    /// Neither side can fight on, or the duel cap was reached
    Stalemate,
}

/// Final state of a battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub team_a: String,
    pub team_b: String,
    pub outcome: BattleOutcome,
    /// Living heroes of team A, roster order
    pub survivors_a: Vec<String>,
    /// Living heroes of team B, roster order
    pub survivors_b: Vec<String>,
    pub duels_fought: u32,
    /// Duels among `duels_fought` that ended without a winner
    pub duels_drawn: u32,
}

impl BattleReport {
    /// Name of the winning team, if any
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            BattleOutcome::TeamAWins => Some(&self.team_a),
            BattleOutcome::TeamBWins => Some(&self.team_b),
            BattleOutcome::Stalemate => None,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let headline = match self.winner() {
            Some(team) => format!("{team} wins!"),
            None => "Stalemate".to_string(),
        };
        format!(
            "{headline} ({} duel(s)); survivors of {}: [{}]; survivors of {}: [{}]",
            self.duels_fought,
            self.team_a,
            self.survivors_a.join(", "),
            self.team_b,
            self.survivors_b.join(", "),
        )
    }
}
