//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Player, Square};

/// Every winning line: rows, then columns, then the two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the player owning the first complete line found in the order
/// of [`LINES`], `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(player)
            }
            _ => None,
        }
    })
}
