//! Command-line arguments.
use std::path::PathBuf;

use clap::Parser;

use monopoly_runtime::SimulationConfig;

/// Simulate a game of Monopoly between computer players
#[derive(Parser, Debug)]
#[command(name = "monopoly")]
#[command(about = "Simulate a game of Monopoly", long_about = None)]
#[command(version)]
pub struct Args {
    /// Player names in seating order (2-8 for a contest, 1 for a solo run)
    #[arg(
        long,
        env = "MONOPOLY_PLAYERS",
        num_args = 1..,
        value_delimiter = ',',
        default_value = "Elmo,Bert,Ernie,Cookie Monster"
    )]
    pub players: Vec<String>,

    /// Seed for dice and shuffles (random when omitted)
    #[arg(long, env = "MONOPOLY_SEED")]
    pub seed: Option<u64>,

    /// Rounds played before the game is called
    #[arg(
        long,
        env = "MONOPOLY_MAX_ROUNDS",
        default_value_t = SimulationConfig::DEFAULT_MAX_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_rounds: u32,

    /// Rule constants as TOML; overrides the data directory's config.toml
    #[arg(long, env = "MONOPOLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding config.toml, track.ron, chance.ron and community_chest.ron
    #[arg(long, env = "MONOPOLY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory for the log file (defaults to the platform cache directory)
    #[arg(long, env = "MONOPOLY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seat_four_players() {
        let args = Args::try_parse_from(["monopoly"]).unwrap();
        assert_eq!(args.players, ["Elmo", "Bert", "Ernie", "Cookie Monster"]);
        assert_eq!(args.max_rounds, SimulationConfig::DEFAULT_MAX_ROUNDS);
        assert!(!args.json);
    }

    #[test]
    fn players_accept_commas_and_repeats() {
        let args =
            Args::try_parse_from(["monopoly", "--players", "Ann,Ben", "Cal", "--seed", "7"])
                .unwrap();
        assert_eq!(args.players, ["Ann", "Ben", "Cal"]);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        assert!(Args::try_parse_from(["monopoly", "--max-rounds", "0"]).is_err());
    }
}
