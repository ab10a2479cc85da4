//! Armor - Randomized defense contribution

use crate::error::{non_negative, Result};
use crate::rng::{draw_checked, RandomSource};
use serde::{Deserialize, Serialize};

/// A named piece of armor that blocks up to `max_block` per hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    name: String,
    max_block: u32,
}

impl Armor {
    /// Create armor, rejecting negative or oversized block values
    pub fn new(name: impl Into<String>, max_block: i64) -> Result<Self> {
        Ok(Armor {
            name: name.into(),
            max_block: non_negative("max_block", max_block)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_block(&self) -> u32 {
        self.max_block
    }

    /// Roll a block in `[0, max_block]`
    pub fn block(&self, rng: &mut impl RandomSource) -> Result<u32> {
        draw_checked(rng, 0, self.max_block)
    }
}
