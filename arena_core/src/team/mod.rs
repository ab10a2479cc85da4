//! Team - An ordered roster of heroes

mod stats;

pub use stats::{MemberStats, TeamStats};

use crate::error::{ArenaError, Result};
use crate::hero::Hero;
use serde::Serialize;

/// A named roster of heroes in insertion order; duplicate names are allowed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Team {
    name: String,
    heroes: Vec<Hero>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            heroes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_hero(&mut self, hero: Hero) {
        self.heroes.push(hero);
    }

    /// Remove the first hero called `name`; false if there is none
    pub fn remove_hero(&mut self, name: &str) -> bool {
        match self.heroes.iter().position(|h| h.name() == name) {
            Some(index) => {
                self.heroes.remove(index);
                true
            }
            None => false,
        }
    }

    /// First hero called `name`
    pub fn find(&self, name: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.name() == name)
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub(crate) fn hero_mut(&mut self, index: usize) -> Option<&mut Hero> {
        self.heroes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Heroes still standing, in roster order
    pub fn living_members(&self) -> Vec<&Hero> {
        self.heroes.iter().filter(|h| h.is_alive()).collect()
    }

    pub fn living_count(&self) -> usize {
        self.heroes.iter().filter(|h| h.is_alive()).count()
    }

    /// Roster indices of heroes that are alive and can deal damage
    pub fn battle_ready_indices(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_alive() && h.can_fight())
            .map(|(i, _)| i)
            .collect()
    }

    /// Restore every hero to starting health
    pub fn revive_all(&mut self) {
        for hero in &mut self.heroes {
            hero.revive();
        }
    }

    /// Per-hero kills/deaths plus roster means
    ///
    /// An empty roster has no meaningful mean and returns `EmptyRoster`.
    pub fn summary_stats(&self) -> Result<TeamStats> {
        if self.heroes.is_empty() {
            return Err(ArenaError::EmptyRoster(self.name.clone()));
        }
        let members = self
            .heroes
            .iter()
            .map(|h| MemberStats {
                name: h.name().to_string(),
                kills: h.kills(),
                deaths: h.deaths(),
            })
            .collect();
        Ok(TeamStats::from_members(&self.name, members))
    }
}
