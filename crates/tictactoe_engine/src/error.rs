//! Error types for the board model.

use crate::Move;

/// Error returned by the strict move application path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Move {} is off the board", _0)]
    OutOfBounds(Move),

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for MoveError {}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),

    /// Fewer or more than nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}
