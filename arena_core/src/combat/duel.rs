//! Duel resolution - Two heroes trade blows until one falls
//!
//! The first hero always strikes first. A hero that falls to that strike
//! never gets its counter-attack, so two heroes can never fall together.

use super::event::{BattleObserver, CombatEvent};
use super::result::DuelResult;
use crate::error::Result;
use crate::hero::Hero;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Default cap on exchange rounds before a duel is called a stalemate
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// When a duel is a draw before any blow is struck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawRule {
    /// Draw only if neither hero can deal damage
    #[default]
    BothUnarmed,
    /// Draw if either hero cannot deal damage (older arena rule)
    EitherUnarmed,
}

impl DrawRule {
    /// Whether this pairing is drawn without fighting
    pub fn is_draw(self, a: &Hero, b: &Hero) -> bool {
        match self {
            DrawRule::BothUnarmed => !a.can_fight() && !b.can_fight(),
            DrawRule::EitherUnarmed => !a.can_fight() || !b.can_fight(),
        }
    }
}

/// Resolves one-on-one combat and updates kill/death records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelEngine {
    pub max_rounds: u32,
    pub draw_rule: DrawRule,
}

impl Default for DuelEngine {
    fn default() -> Self {
        DuelEngine {
            max_rounds: DEFAULT_MAX_ROUNDS,
            draw_rule: DrawRule::default(),
        }
    }
}

impl DuelEngine {
    pub fn new(max_rounds: u32, draw_rule: DrawRule) -> Self {
        DuelEngine { max_rounds, draw_rule }
    }

    /// Fight `a` against `b` until one falls
    ///
    /// `a` attacks first each round. The survivor gets a kill and the fallen
    /// hero a death. Draws (unarmed pairing, a hero already down, or the round
    /// cap) change no records.
    pub fn resolve(
        &self,
        a: &mut Hero,
        b: &mut Hero,
        rng: &mut impl RandomSource,
        observer: &mut impl BattleObserver,
    ) -> Result<DuelResult> {
        if !a.is_alive() || !b.is_alive() || self.draw_rule.is_draw(a, b) {
            debug!(first = a.name(), second = b.name(), "duel drawn before any blow");
            return Ok(Self::draw(a, b, 0, observer));
        }

        let mut rounds = 0;
        while a.is_alive() && b.is_alive() {
            if rounds >= self.max_rounds {
                warn!(
                    first = a.name(),
                    second = b.name(),
                    rounds,
                    "duel hit round cap, calling it a draw"
                );
                return Ok(Self::draw(a, b, rounds, observer));
            }
            rounds += 1;

            Self::strike(a, b, rng, observer)?;
            if !b.is_alive() {
                break;
            }
            Self::strike(b, a, rng, observer)?;
        }

        let (winner, loser) = if a.is_alive() { (a, b) } else { (b, a) };
        winner.record_kill();
        loser.record_death();

        debug!(winner = winner.name(), loser = loser.name(), rounds, "duel won");
        observer.on_event(&CombatEvent::DuelWon {
            winner: winner.name().to_string(),
            loser: loser.name().to_string(),
            rounds,
        });

        Ok(DuelResult::victory(winner.name(), loser.name(), rounds))
    }

    fn strike(
        attacker: &Hero,
        defender: &mut Hero,
        rng: &mut impl RandomSource,
        observer: &mut impl BattleObserver,
    ) -> Result<()> {
        let attack = attacker.total_attack(rng)?;
        let net = defender.apply_damage(attack, rng)?;
        trace!(
            attacker = attacker.name(),
            defender = defender.name(),
            attack,
            net,
            health = defender.current_health(),
            "strike"
        );
        observer.on_event(&CombatEvent::HealthChanged {
            hero: defender.name().to_string(),
            current_health: defender.current_health(),
        });
        Ok(())
    }

    fn draw(a: &Hero, b: &Hero, rounds: u32, observer: &mut impl BattleObserver) -> DuelResult {
        observer.on_event(&CombatEvent::DuelDrawn {
            first: a.name().to_string(),
            second: b.name().to_string(),
        });
        DuelResult::draw(rounds)
    }
}
