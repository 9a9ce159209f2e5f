//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
pub fn is_tie(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().apply_move(Move::CENTER, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // X X X / O O X / X O O
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
