//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A (row, column) pair naming a cell to mark.
///
/// Constructing a move does not validate it. Whether a move is legal
/// depends on the board it is played on; see [`crate::Board::is_legal_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All in-range moves in row-major order.
    pub const ALL: [Move; CELLS] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// The centre cell.
    pub const CENTER: Move = Move::new(1, 1);

    /// The four corners in row-major order.
    pub const CORNERS: [Move; 4] = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(2, 2),
    ];

    /// Creates a move. Coordinates are not checked.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// True when both coordinates lie in `0..3`.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major cell index (0-8), or `None` when out of range.
    pub fn index(&self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }

    /// Creates a move from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then_some(Self::new(index / SIZE, index % SIZE))
    }

    /// Human-readable cell name.
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing a move from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid move {:?}: expected \"row,col\"", _0)]
pub struct MoveParseError(pub String);

impl std::error::Error for MoveParseError {}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `"row,col"` (surrounding parentheses and spaces allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Move::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_row_major() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), Some(i));
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(3, 3).label(), "Off-board");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("1,2".parse(), Ok(Move::new(1, 2)));
        assert_eq!("(0, 2)".parse(), Ok(Move::new(0, 2)));
        assert!("12".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
    }
}
