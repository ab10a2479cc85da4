//! Hero - A combatant owning capabilities and armor
//!
//! A hero's attack is the sum of one roll per capability and its defense the
//! sum of one roll per armor piece. Health only goes up through [`Hero::revive`].

mod armor;
mod capability;

pub use armor::Armor;
pub use capability::{Capability, CapabilityKind};

use crate::error::{positive, Result};
use crate::rng::RandomSource;
use serde::Serialize;

/// Starting health used when a roster does not specify one
pub const DEFAULT_STARTING_HEALTH: u32 = 100;

/// A combatant with health, gear and a kill/death record
///
/// Only built through validated constructors, so it is serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    name: String,
    starting_health: u32,
    current_health: i64,
    capabilities: Vec<Capability>,
    armors: Vec<Armor>,
    kills: u32,
    deaths: u32,
}

impl Hero {
    /// Create a hero at full health; `starting_health` must be positive
    pub fn new(name: impl Into<String>, starting_health: i64) -> Result<Self> {
        let starting_health = positive("starting_health", starting_health)?;
        Ok(Self::at_full_health(name.into(), starting_health))
    }

    /// Create a hero with [`DEFAULT_STARTING_HEALTH`]
    pub fn with_default_health(name: impl Into<String>) -> Self {
        Self::at_full_health(name.into(), DEFAULT_STARTING_HEALTH)
    }

    fn at_full_health(name: String, starting_health: u32) -> Self {
        Hero {
            name,
            starting_health,
            current_health: i64::from(starting_health),
            capabilities: Vec::new(),
            armors: Vec::new(),
            kills: 0,
            deaths: 0,
        }
    }

    // === Roster building ===

    pub fn add_capability(&mut self, capability: Capability) {
        self.capabilities.push(capability);
    }

    /// Add an ability (convenience for `add_capability`)
    pub fn add_ability(&mut self, name: impl Into<String>, max_power: i64) -> Result<()> {
        self.add_capability(Capability::ability(name, max_power)?);
        Ok(())
    }

    /// Add a weapon (convenience for `add_capability`)
    pub fn add_weapon(&mut self, name: impl Into<String>, max_power: i64) -> Result<()> {
        self.add_capability(Capability::weapon(name, max_power)?);
        Ok(())
    }

    pub fn add_armor(&mut self, armor: Armor) {
        self.armors.push(armor);
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting_health(&self) -> u32 {
        self.starting_health
    }

    pub fn current_health(&self) -> i64 {
        self.current_health
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn armors(&self) -> &[Armor] {
        &self.armors
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Kills per death, `None` while the hero has never died
    pub fn kill_death_ratio(&self) -> Option<f64> {
        if self.deaths == 0 {
            None
        } else {
            Some(f64::from(self.kills) / f64::from(self.deaths))
        }
    }

    // === Combat ===

    /// Roll every capability and sum the results
    pub fn total_attack(&self, rng: &mut impl RandomSource) -> Result<u64> {
        let mut total = 0u64;
        for capability in &self.capabilities {
            total += u64::from(capability.attack(rng)?);
        }
        Ok(total)
    }

    /// Roll every armor piece and sum the results
    pub fn total_defense(&self, rng: &mut impl RandomSource) -> Result<u64> {
        let mut total = 0u64;
        for armor in &self.armors {
            total += u64::from(armor.block(rng)?);
        }
        Ok(total)
    }

    /// Take a hit; returns the damage that got through armor
    ///
    /// Armor can absorb the whole hit but never heals.
    pub fn apply_damage(&mut self, incoming: u64, rng: &mut impl RandomSource) -> Result<u64> {
        let defense = self.total_defense(rng)?;
        let net = incoming.saturating_sub(defense);
        self.current_health = self
            .current_health
            .saturating_sub(i64::try_from(net).unwrap_or(i64::MAX));
        Ok(net)
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Whether any capability can roll above zero
    pub fn can_fight(&self) -> bool {
        self.capabilities.iter().any(Capability::can_deal_damage)
    }

    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn record_death(&mut self) {
        self.deaths += 1;
    }

    /// Restore starting health; kills and deaths are kept
    pub fn revive(&mut self) {
        self.current_health = i64::from(self.starting_health);
    }
}
