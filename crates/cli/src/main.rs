//! Monopoly simulator binary.
//!
//! Seats computer players on the standard board (or a board loaded from a
//! data directory), plays until one player is left or the round limit is
//! reached, and prints the final standings.
//!
//! ```bash
//! monopoly --players Elmo,Bert --seed 42 --max-rounds 200
//! RUST_LOG=monopoly::game=debug monopoly --json
//! ```
mod args;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use monopoly_content::{ConfigLoader, ContentFactory};
use monopoly_core::GameConfig;
use monopoly_runtime::{Simulation, SimulationConfig};

use args::Args;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_dir = if args.no_log_file {
        None
    } else {
        args.log_dir.clone().or_else(logging::default_log_dir)
    };
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    let mut simulation = build_simulation(&args)?;
    let report = simulation.run()?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn build_simulation(args: &Args) -> Result<Simulation> {
    let mut game = GameConfig::default();
    let mut builder = Simulation::builder();

    if let Some(dir) = &args.data_dir {
        let factory = ContentFactory::new(dir);
        tracing::info!("Loading content from {}", factory.data_dir().display());
        game = factory.load_config()?;
        builder = builder
            .track(factory.load_track()?)
            .chance(factory.load_chance()?)
            .community_chest(factory.load_community_chest()?);
    }

    if let Some(path) = &args.config {
        game = ConfigLoader::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
    }

    let mut config = SimulationConfig::new(game).with_max_rounds(args.max_rounds);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let simulation = builder
        .config(config)
        .standard_players(args.players.iter().cloned())
        .build()?;
    Ok(simulation)
}
