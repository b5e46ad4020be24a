//! Command-line interface for noughts_and_crosses.

use crate::config::FirstMover;
use clap::Parser;
use std::path::PathBuf;

/// Noughts and Crosses - play one game against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Play noughts and crosses against a rule-based computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who moves first (defaults to a coin flip)
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Seed for the first-mover coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file with `first` and `seed` keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["noughts_and_crosses"]).unwrap();
        assert!(cli.first.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "noughts_and_crosses",
            "--first",
            "computer",
            "--seed",
            "9",
            "-c",
            "game.toml",
        ])
        .unwrap();
        assert_eq!(cli.first, Some(FirstMover::Computer));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_rejects_unknown_first_mover() {
        assert!(Cli::try_parse_from(["noughts_and_crosses", "--first", "nobody"]).is_err());
    }
}
