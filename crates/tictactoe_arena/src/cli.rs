//! Command-line interface for tictactoe_arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_arena::StartMode;
use tictactoe_engine::{Board, Player};

/// Tic-tac-toe arena - random, heuristic and minimax policies
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Pit tic-tac-toe policies against each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run AI-vs-AI games and write a CSV log
    Tourney {
        /// TOML config file; flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Games per pairing
        #[arg(short, long)]
        games: Option<u32>,

        /// Pairings like "1,2;1,3" (levels or names); default all nine
        #[arg(short, long)]
        pairs: Option<String>,

        /// CSV output file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Who starts: x, o or alternate
        #[arg(long)]
        start: Option<StartMode>,

        /// Seed for the random policy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarise a CSV log per pairing
    Report {
        /// CSV file written by `tourney`
        csvfile: PathBuf,
    },

    /// Score every move of a position
    Suggest {
        /// Nine cells, row-major: X, O or . (e.g. "XX.OO....")
        board: Board,

        /// Side to move
        #[arg(short = 'p', long, default_value = "X")]
        player: Player,

        /// Search without alpha-beta cutoffs
        #[arg(long)]
        no_prune: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tourney_flags() {
        let cli = Cli::parse_from([
            "tictactoe_arena",
            "tourney",
            "-g",
            "10",
            "--pairs",
            "1,3",
            "--start",
            "o",
            "--seed",
            "5",
        ]);
        match cli.command {
            Command::Tourney {
                games,
                pairs,
                start,
                seed,
                config,
                out,
            } => {
                assert_eq!(games, Some(10));
                assert_eq!(pairs.as_deref(), Some("1,3"));
                assert_eq!(start, Some(StartMode::O));
                assert_eq!(seed, Some(5));
                assert_eq!(config, None);
                assert_eq!(out, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::parse_from(["tictactoe_arena", "suggest", "XX.OO....", "-p", "o"]);
        match cli.command {
            Command::Suggest {
                board,
                player,
                no_prune,
                json,
            } => {
                assert_eq!(board, "XX. OO. ...".parse().unwrap());
                assert_eq!(player, Player::O);
                assert!(!no_prune);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["tictactoe_arena", "suggest", "XX"]).is_err());
    }
}
