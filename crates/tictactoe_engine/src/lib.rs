//! Tic-tac-toe rules engine with exhaustive alpha-beta search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] is a `Copy` value holding nine [`Square`]s.
//!   Applying a [`Move`] yields a new board; the in-place variant reports
//!   whether the move was legal.
//! - **Rules**: pure win and tie checks in [`rules`].
//! - **Search**: [`Searcher`] runs minimax with optional alpha-beta
//!   pruning and picks the first move, in row-major order, with the best
//!   ternary score.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Move, Player, select_move};
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! assert_eq!(select_move(&board, Player::O), Some(Move::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::Board;
pub use error::{BoardParseError, MoveError};
pub use position::{CELLS, Move, MoveParseError, SIZE};
pub use search::{
    INFINITY, LOSS, NEG_INFINITY, Pruning, Score, ScoredMove, Searcher, TIE, WIN, select_move,
};
pub use types::{Outcome, Player, Square};
