//! Capability - Randomized attack contribution (abilities and weapons)

use crate::error::{non_negative, Result};
use crate::rng::{draw_checked, RandomSource};
use serde::{Deserialize, Serialize};

/// How a capability rolls its attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Rolls anywhere in `[0, max_power]`
    Ability,
    /// Always hits for at least half: `[max_power / 2, max_power]`
    Weapon,
}

/// A named source of attack power
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    name: String,
    max_power: u32,
    kind: CapabilityKind,
}

impl Capability {
    /// Create a capability, rejecting negative or oversized power
    pub fn new(name: impl Into<String>, max_power: i64, kind: CapabilityKind) -> Result<Self> {
        Ok(Capability {
            name: name.into(),
            max_power: non_negative("max_power", max_power)?,
            kind,
        })
    }

    pub fn ability(name: impl Into<String>, max_power: i64) -> Result<Self> {
        Self::new(name, max_power, CapabilityKind::Ability)
    }

    pub fn weapon(name: impl Into<String>, max_power: i64) -> Result<Self> {
        Self::new(name, max_power, CapabilityKind::Weapon)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_power(&self) -> u32 {
        self.max_power
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Lowest value `attack` can return
    pub fn min_roll(&self) -> u32 {
        match self.kind {
            CapabilityKind::Ability => 0,
            CapabilityKind::Weapon => self.max_power / 2,
        }
    }

    /// Highest value `attack` can return
    pub fn max_roll(&self) -> u32 {
        self.max_power
    }

    /// Whether this capability can ever roll above zero
    pub fn can_deal_damage(&self) -> bool {
        self.max_power > 0
    }

    /// Roll this capability's attack
    pub fn attack(&self, rng: &mut impl RandomSource) -> Result<u32> {
        draw_checked(rng, self.min_roll(), self.max_roll())
    }
}
