//! Battle - Team against team, one random duel at a time
//!
//! Each step draws one battle-ready hero (alive and able to deal damage) from
//! each side and duels them. Heroes that cannot deal damage are never drawn,
//! so an unarmed pairing cannot be re-picked forever; the duel cap bounds
//! everything else.
//!
//! A side loses once it has no battle-ready hero while the other still has
//! one. When neither side can fight, the side with heroes still standing wins.

mod report;

pub use report::{BattleOutcome, BattleReport};

use crate::combat::{BattleObserver, CombatEvent, DuelEngine};
use crate::config::ArenaConfig;
use crate::error::Result;
use crate::rng::{pick_index, RandomSource};
use crate::team::Team;
use tracing::{debug, info, warn};

/// Default cap on duels in one battle
pub const DEFAULT_MAX_DUELS: u32 = 100_000;

/// Runs team battles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleEngine {
    pub duel: DuelEngine,
    pub max_duels: u32,
}

impl Default for BattleEngine {
    fn default() -> Self {
        BattleEngine {
            duel: DuelEngine::default(),
            max_duels: DEFAULT_MAX_DUELS,
        }
    }
}

impl BattleEngine {
    pub fn new(duel: DuelEngine, max_duels: u32) -> Self {
        BattleEngine { duel, max_duels }
    }

    /// Build an engine from loaded configuration
    pub fn from_config(config: &ArenaConfig) -> Self {
        BattleEngine {
            duel: DuelEngine::new(config.duel.max_rounds, config.duel.draw_rule),
            max_duels: config.battle.max_duels,
        }
    }

    /// Duel random battle-ready heroes until one side has none left
    pub fn run_battle(
        &self,
        team_a: &mut Team,
        team_b: &mut Team,
        rng: &mut impl RandomSource,
        observer: &mut impl BattleObserver,
    ) -> Result<BattleReport> {
        let mut duels_fought = 0;
        let mut duels_drawn = 0;

        let outcome = loop {
            let ready_a = team_a.battle_ready_indices();
            let ready_b = team_b.battle_ready_indices();

            match (ready_a.is_empty(), ready_b.is_empty()) {
                (false, true) => break BattleOutcome::TeamAWins,
                (true, false) => break BattleOutcome::TeamBWins,
                (true, true) => break decide_unarmed(team_a, team_b),
                (false, false) => {}
            }

            if duels_fought >= self.max_duels {
                warn!(
                    team_a = team_a.name(),
                    team_b = team_b.name(),
                    duels_fought,
                    "battle hit duel cap, calling it a stalemate"
                );
                break BattleOutcome::Stalemate;
            }

            let index_a = ready_a[pick_index(rng, ready_a.len())?];
            let index_b = ready_b[pick_index(rng, ready_b.len())?];
            let (Some(a), Some(b)) = (team_a.hero_mut(index_a), team_b.hero_mut(index_b)) else {
                break BattleOutcome::Stalemate;
            };

            debug!(first = a.name(), second = b.name(), "duel starts");
            let result = self.duel.resolve(a, b, rng, observer)?;
            duels_fought += 1;
            if result.is_draw {
                duels_drawn += 1;
            }
        };

        let report = BattleReport {
            team_a: team_a.name().to_string(),
            team_b: team_b.name().to_string(),
            outcome,
            survivors_a: survivor_names(team_a),
            survivors_b: survivor_names(team_b),
            duels_fought,
            duels_drawn,
        };

        info!(
            team_a = team_a.name(),
            team_b = team_b.name(),
            outcome = ?report.outcome,
            duels_fought,
            "battle finished"
        );
        observer.on_event(&CombatEvent::BattleFinished {
            team_a: report.team_a.clone(),
            team_b: report.team_b.clone(),
            duels: duels_fought,
        });

        Ok(report)
    }

    /// Revive both rosters and fight again
    pub fn rematch(
        &self,
        team_a: &mut Team,
        team_b: &mut Team,
        rng: &mut impl RandomSource,
        observer: &mut impl BattleObserver,
    ) -> Result<BattleReport> {
        team_a.revive_all();
        team_b.revive_all();
        self.run_battle(team_a, team_b, rng, observer)
    }
}

/// Neither side can fight: a side with nobody left standing loses
fn decide_unarmed(team_a: &Team, team_b: &Team) -> BattleOutcome {
    match (team_a.living_count(), team_b.living_count()) {
        (0, living_b) if living_b > 0 => BattleOutcome::TeamBWins,
        (living_a, 0) if living_a > 0 => BattleOutcome::TeamAWins,
        _ => BattleOutcome::Stalemate,
    }
}

fn survivor_names(team: &Team) -> Vec<String> {
    team.living_members()
        .iter()
        .map(|h| h.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{EventLog, NoopObserver};
    use crate::hero::{Armor, Hero};
    use crate::rng::testing::MaxSource;
    use crate::rng::RngSource;

    fn fighter(name: &str, health: i64, power: i64) -> Hero {
        let mut hero = Hero::new(name, health).unwrap();
        hero.add_ability("Strike", power).unwrap();
        hero
    }

    fn team(name: &str, heroes: Vec<Hero>) -> Team {
        let mut team = Team::new(name);
        for hero in heroes {
            team.add_hero(hero);
        }
        team
    }

    #[test]
    fn test_empty_team_ends_immediately() {
        let mut heroes = team("Heroes", vec![fighter("Batman", 100, 10), fighter("Flash", 100, 10)]);
        let mut empty = Team::new("Nobody");
        let mut log = EventLog::new();

        let report = BattleEngine::default()
            .run_battle(&mut heroes, &mut empty, &mut RngSource::seeded(1), &mut log)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamAWins);
        assert_eq!(report.duels_fought, 0);
        assert_eq!(report.survivors_a, vec!["Batman", "Flash"]);
        assert!(report.survivors_b.is_empty());
        assert_eq!(log.events.len(), 1);
    }

    #[test]
    fn test_both_empty_is_stalemate() {
        let report = BattleEngine::default()
            .run_battle(
                &mut Team::new("A"),
                &mut Team::new("B"),
                &mut MaxSource,
                &mut NoopObserver,
            )
            .unwrap();
        assert_eq!(report.outcome, BattleOutcome::Stalemate);
    }

    #[test]
    fn test_one_sided_battle() {
        let mut strong = team("Strong", vec![fighter("Titan", 1000, 500)]);
        let mut weak = team(
            "Weak",
            vec![fighter("Minion 1", 10, 1), fighter("Minion 2", 10, 1), fighter("Minion 3", 10, 1)],
        );

        let report = BattleEngine::default()
            .run_battle(&mut strong, &mut weak, &mut RngSource::seeded(9), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamAWins);
        assert_eq!(report.winner(), Some("Strong"));
        assert_eq!(report.duels_fought, 3);
        assert!(report.survivors_b.is_empty());
        assert_eq!(strong.heroes()[0].kills(), 3);
        assert!(weak.heroes().iter().all(|h| h.deaths() == 1));
    }

    #[test]
    fn test_unarmed_heroes_are_never_drawn() {
        let mut armed = team("Armed", vec![fighter("Knight", 100, 50)]);
        let mut unarmed = team(
            "Pacifists",
            vec![Hero::with_default_health("Monk"), Hero::with_default_health("Nun")],
        );

        let report = BattleEngine::default()
            .run_battle(&mut armed, &mut unarmed, &mut RngSource::seeded(4), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamAWins);
        assert_eq!(report.duels_fought, 0);
        assert_eq!(report.survivors_b, vec!["Monk", "Nun"]);
    }

    #[test]
    fn test_empty_team_loses_to_unarmed_team() {
        let mut nobody = Team::new("Nobody");
        let mut monks = team("Monastery", vec![Hero::with_default_health("Monk")]);

        let report = BattleEngine::default()
            .run_battle(&mut nobody, &mut monks, &mut RngSource::seeded(4), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamBWins);
        assert_eq!(report.duels_fought, 0);
        assert!(report.survivors_a.is_empty());
        assert_eq!(report.survivors_b, vec!["Monk"]);
    }

    #[test]
    fn test_fallen_team_loses_to_unarmed_team() {
        let mut knight = fighter("Knight", 10, 50);
        knight.apply_damage(100, &mut MaxSource).unwrap();
        let mut fallen = team("Fallen", vec![knight]);
        let mut monks = team("Monastery", vec![Hero::with_default_health("Monk")]);

        let report = BattleEngine::default()
            .run_battle(&mut fallen, &mut monks, &mut RngSource::seeded(4), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamBWins);
        assert!(report.survivors_a.is_empty());
        assert_eq!(report.survivors_b, vec!["Monk"]);
    }

    #[test]
    fn test_unarmed_team_beats_fallen_team() {
        let mut monks = team("Monastery", vec![Hero::with_default_health("Monk")]);
        let mut knight = fighter("Knight", 10, 50);
        knight.apply_damage(100, &mut MaxSource).unwrap();
        let mut fallen = team("Fallen", vec![knight]);

        let report = BattleEngine::default()
            .run_battle(&mut monks, &mut fallen, &mut RngSource::seeded(4), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::TeamAWins);
        assert_eq!(report.winner(), Some("Monastery"));
    }

    #[test]
    fn test_both_unarmed_terminates() {
        let mut a = team("A", vec![Hero::with_default_health("A1")]);
        let mut b = team("B", vec![Hero::with_default_health("B1")]);
        let report = BattleEngine::default()
            .run_battle(&mut a, &mut b, &mut RngSource::seeded(4), &mut NoopObserver)
            .unwrap();
        assert_eq!(report.outcome, BattleOutcome::Stalemate);
        assert_eq!(report.duels_fought, 0);
    }

    #[test]
    fn test_duel_cap_ends_stalemate() {
        let mut wall_a = fighter("Wall A", 100, 5);
        wall_a.add_armor(Armor::new("Bulwark", 100).unwrap());
        let mut wall_b = fighter("Wall B", 100, 5);
        wall_b.add_armor(Armor::new("Bulwark", 100).unwrap());
        let mut a = team("A", vec![wall_a]);
        let mut b = team("B", vec![wall_b]);

        let engine = BattleEngine::new(DuelEngine::new(10, Default::default()), 3);
        let report = engine
            .run_battle(&mut a, &mut b, &mut MaxSource, &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::Stalemate);
        assert_eq!(report.duels_fought, 3);
        assert_eq!(report.duels_drawn, 3);
        assert_eq!(report.survivors_a, vec!["Wall A"]);
    }

    #[test]
    fn test_rematch_revives() {
        let mut strong = team("Strong", vec![fighter("Titan", 1000, 500)]);
        let mut weak = team("Weak", vec![fighter("Minion", 10, 1)]);
        let engine = BattleEngine::default();
        let mut rng = RngSource::seeded(11);

        engine.run_battle(&mut strong, &mut weak, &mut rng, &mut NoopObserver).unwrap();
        let report = engine.rematch(&mut strong, &mut weak, &mut rng, &mut NoopObserver).unwrap();

        assert_eq!(report.duels_fought, 1);
        assert_eq!(strong.heroes()[0].kills(), 2);
        assert_eq!(weak.heroes()[0].deaths(), 2);
    }

    #[test]
    fn test_from_config() {
        let mut config = ArenaConfig::default();
        config.battle.max_duels = 7;
        config.duel.max_rounds = 3;
        let engine = BattleEngine::from_config(&config);
        assert_eq!(engine.max_duels, 7);
        assert_eq!(engine.duel.max_rounds, 3);
    }
}
