//! Roster definitions - Teams and heroes described in TOML

use super::{ArenaConfig, ConfigError};
use crate::hero::{Armor, Hero};
use crate::team::Team;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for team definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    #[serde(default)]
    pub heroes: Vec<HeroConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub name: String,
    /// Falls back to `roster.default_starting_health`
    #[serde(default)]
    pub starting_health: Option<i64>,
    #[serde(default)]
    pub abilities: Vec<GearConfig>,
    #[serde(default)]
    pub weapons: Vec<GearConfig>,
    #[serde(default)]
    pub armors: Vec<GearConfig>,
}

/// A named piece of gear and its maximum roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearConfig {
    pub name: String,
    pub max: i64,
}

impl HeroConfig {
    /// Build the hero, validating every value
    pub fn build(&self, config: &ArenaConfig) -> Result<Hero, ConfigError> {
        let health = self
            .starting_health
            .unwrap_or_else(|| i64::from(config.roster.default_starting_health));
        let mut hero = Hero::new(self.name.clone(), health)?;
        for ability in &self.abilities {
            hero.add_ability(ability.name.clone(), ability.max)?;
        }
        for weapon in &self.weapons {
            hero.add_weapon(weapon.name.clone(), weapon.max)?;
        }
        for armor in &self.armors {
            hero.add_armor(Armor::new(armor.name.clone(), armor.max)?);
        }
        Ok(hero)
    }
}

impl TeamConfig {
    pub fn build(&self, config: &ArenaConfig) -> Result<Team, ConfigError> {
        let mut team = Team::new(self.name.clone());
        for hero in &self.heroes {
            team.add_hero(hero.build(config)?);
        }
        Ok(team)
    }
}

impl RosterConfig {
    /// Build every team in file order
    pub fn build_teams(&self, config: &ArenaConfig) -> Result<Vec<Team>, ConfigError> {
        self.teams.iter().map(|team| team.build(config)).collect()
    }

    /// Build exactly two opposing teams
    pub fn build_matchup(&self, config: &ArenaConfig) -> Result<(Team, Team), ConfigError> {
        match self.build_teams(config)?.as_slice() {
            [a, b] => Ok((a.clone(), b.clone())),
            teams => Err(ConfigError::ValidationError(format!(
                "a battle needs exactly 2 teams, roster has {}",
                teams.len()
            ))),
        }
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    super::load_toml(path)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    super::parse_toml(content)
}

/// Built-in two-team roster
pub fn default_roster() -> Result<RosterConfig, ConfigError> {
    parse_roster(include_str!("../../config/roster.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::CapabilityKind;

    const ROSTER: &str = r#"
[[teams]]
name = "Justice League"

[[teams.heroes]]
name = "Wonder Woman"
starting_health = 200
abilities = [{ name = "Super Speed", max = 300 }]
weapons = [{ name = "Lasso of Truth", max = 90 }]
armors = [{ name = "Bracers", max = 40 }]

[[teams.heroes]]
name = "Batman"
abilities = [{ name = "Detective Skills", max = 60 }]

[[teams]]
name = "Hogwarts"

[[teams.heroes]]
name = "Dumbledore"
abilities = [{ name = "Wizard Wand", max = 80 }, { name = "Wizard Beard", max = 20 }]
"#;

    #[test]
    fn test_parse_roster() {
        let roster = parse_roster(ROSTER).unwrap();
        assert_eq!(roster.teams.len(), 2);
        assert_eq!(roster.teams[0].heroes.len(), 2);
        assert_eq!(roster.teams[0].heroes[1].starting_health, None);
    }

    #[test]
    fn test_build_matchup() {
        let config = ArenaConfig::default();
        let (league, hogwarts) = parse_roster(ROSTER).unwrap().build_matchup(&config).unwrap();

        let wonder = league.find("Wonder Woman").unwrap();
        assert_eq!(wonder.starting_health(), 200);
        assert_eq!(wonder.capabilities().len(), 2);
        assert_eq!(wonder.capabilities()[1].kind(), CapabilityKind::Weapon);
        assert_eq!(wonder.armors()[0].max_block(), 40);

        assert_eq!(league.find("Batman").unwrap().starting_health(), 100);
        assert_eq!(hogwarts.heroes()[0].capabilities().len(), 2);
    }

    #[test]
    fn test_default_health_from_config() {
        let mut config = ArenaConfig::default();
        config.roster.default_starting_health = 75;
        let teams = parse_roster(ROSTER).unwrap().build_teams(&config).unwrap();
        assert_eq!(teams[0].find("Batman").unwrap().starting_health(), 75);
    }

    #[test]
    fn test_negative_values_rejected() {
        let roster = parse_roster(
            r#"
[[teams]]
name = "Broken"

[[teams.heroes]]
name = "Cursed"
armors = [{ name = "Hole", max = -3 }]
"#,
        )
        .unwrap();
        let err = roster.build_teams(&ArenaConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Arena(_)));
    }

    #[test]
    fn test_matchup_needs_two_teams() {
        let roster = RosterConfig::default();
        let err = roster.build_matchup(&ArenaConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_default_roster_builds() {
        let (a, b) = default_roster()
            .unwrap()
            .build_matchup(&ArenaConfig::default())
            .unwrap();
        assert!(!a.is_empty());
        assert!(!b.is_empty());
    }
}
