//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to the rules. They are
//! kept apart from board storage so the search and the policies can call
//! them directly.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner};
