//! arena_demo - Headless arena runner
//!
//! Loads two teams from a roster file (or the built-in roster), runs one
//! battle and prints the survivors and each team's kill/death table.

use arena_core::config::{default_roster, load_roster};
use arena_core::prelude::*;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Run one team battle and report the results
#[derive(Parser, Debug)]
#[command(name = "arena_demo")]
#[command(about = "Run a team battle between two hero rosters")]
struct Args {
    /// Roster TOML with exactly two [[teams]] (built-in roster if omitted)
    roster: Option<PathBuf>,

    /// Arena settings TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Narrate every hit
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Arena(#[from] ArenaError),
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown output format '{0}' (expected text or json)")]
    Format(String),
}

/// JSON output structure
#[derive(Serialize)]
struct DemoOutput {
    seed: u64,
    report: BattleReport,
    stats: Vec<TeamStats>,
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.format != "text" && args.format != "json" {
        return Err(DemoError::Format(args.format));
    }

    let config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    let roster = match &args.roster {
        Some(path) => load_roster(path)?,
        None => default_roster()?,
    };
    let (mut team_a, mut team_b) = roster.build_matchup(&config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, team_a = team_a.name(), team_b = team_b.name(), "Arena battle starting");

    let engine = BattleEngine::from_config(&config);
    let mut rng = RngSource::seeded(seed);
    let verbose = args.verbose && args.format == "text";
    let mut narrator = |event: &CombatEvent| {
        if verbose {
            println!("{}", event.describe());
        }
    };
    let report = engine.run_battle(&mut team_a, &mut team_b, &mut rng, &mut narrator)?;

    let stats = [&team_a, &team_b]
        .into_iter()
        .filter_map(|team| match team.summary_stats() {
            Ok(stats) => Some(stats),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        })
        .collect::<Vec<_>>();

    if args.format == "json" {
        let output = DemoOutput { seed, report, stats };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.summary());
        for team_stats in &stats {
            print!("{}", team_stats.render());
        }
    }

    Ok(())
}
