//! Tic-tac-toe arena - three tiers of policy and a tournament runner
//!
//! # Architecture
//!
//! - **Policies**: random, heuristic and minimax move selection behind the
//!   [`Policy`] trait, chosen per side through [`Strategy`]
//! - **Game**: [`play_game`] drives one game, forfeiting a side whose policy
//!   answers with an illegal move
//! - **Tournament**: [`run_tournament`] plays every pairing and logs one CSV
//!   row per game
//! - **Report**: [`Report`] aggregates a log per pairing
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{MatchRecord, Pairing, Strategy, TournamentConfig, run_tournament};
//!
//! # fn example() -> tictactoe_arena::ArenaResult<()> {
//! let config = TournamentConfig::default()
//!     .with_games(4)
//!     .with_pairs(vec![Pairing::new(Strategy::Minimax, Strategy::Minimax)]);
//! let mut rows: Vec<MatchRecord> = Vec::new();
//! let report = run_tournament(&config, &mut rows)?;
//! assert_eq!(report.get(3, 3).map(|s| s.ties), Some(4));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod policy;
mod report;
mod strategy;
mod suggest;
mod tournament;

// Crate-level exports - Errors
pub use error::{ArenaError, ArenaErrorKind, ArenaResult};

// Crate-level exports - Policies
pub use policy::{HeuristicPolicy, MinimaxPolicy, Policy, RandomPolicy};
pub use strategy::Strategy;

// Crate-level exports - Games and tournaments
pub use game::{GameRecord, play_game};
pub use tournament::{
    CsvWriter, HEADER, MatchRecord, Pairing, RecordSink, StartMode, TournamentConfig,
    run_to_file, run_tournament,
};

// Crate-level exports - Analysis
pub use report::{LevelStats, PairingStats, Report};
pub use suggest::{Suggestion, suggest};
