//! Team statistics - Kill/death summaries

use serde::{Deserialize, Serialize};

/// Kill/death record of one hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
}

impl MemberStats {
    /// Kills per death, `None` if the hero never died
    pub fn kill_death_ratio(&self) -> Option<f64> {
        if self.deaths == 0 {
            None
        } else {
            Some(f64::from(self.kills) / f64::from(self.deaths))
        }
    }
}

/// Roster-wide kill/death summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: String,
    /// Per-hero records in roster order
    pub members: Vec<MemberStats>,
    pub mean_kills: f64,
    pub mean_deaths: f64,
}

impl TeamStats {
    /// Build from a non-empty member list
    pub(crate) fn from_members(team: &str, members: Vec<MemberStats>) -> Self {
        let count = members.len() as f64;
        let kills: u64 = members.iter().map(|m| u64::from(m.kills)).sum();
        let deaths: u64 = members.iter().map(|m| u64::from(m.deaths)).sum();
        TeamStats {
            team: team.to_string(),
            members,
            mean_kills: kills as f64 / count,
            mean_deaths: deaths as f64 / count,
        }
    }

    /// Render as a plain-text table
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.team);
        for member in &self.members {
            let ratio = match member.kill_death_ratio() {
                Some(ratio) => format!("{ratio:.2}"),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "  {:<20} kills: {:>3}  deaths: {:>3}  k/d: {:>5}\n",
                member.name, member.kills, member.deaths, ratio
            ));
        }
        out.push_str(&format!(
            "  average kills: {:.2}  average deaths: {:.2}\n",
            self.mean_kills, self.mean_deaths
        ));
        out
    }
}
