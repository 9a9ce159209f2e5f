//! The 3x3 board value.

use crate::position::{CELLS, SIZE};
use crate::{BoardParseError, Move, MoveError, Outcome, Player, Square, rules};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: [`Board::apply_move`] returns a new board and
/// leaves the receiver untouched, so search branches never see each
/// other's tentative marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square for a move's coordinates, `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|i| self.squares[i])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Empty cells in row-major order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(|mv| self.get(*mv) == Some(Square::Empty))
    }

    /// Every empty cell, row 0..2 then column 0..2.
    ///
    /// The order is part of the contract: the search breaks score ties by
    /// the first move in this sequence.
    pub fn available_moves(&self) -> Vec<Move> {
        self.moves().collect()
    }

    /// True iff the move is on the board and its square is empty.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.get(mv) == Some(Square::Empty)
    }

    /// Returns a copy of the board with `player`'s mark at `mv`.
    ///
    /// An illegal move yields an unmodified copy.
    pub fn apply_move(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.make_move_in_place(mv, player);
        next
    }

    /// Strict form of [`Board::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] instead
    /// of a silent no-op.
    pub fn try_apply_move(&self, mv: Move, player: Player) -> Result<Board, MoveError> {
        match self.get(mv) {
            None => Err(MoveError::OutOfBounds(mv)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(mv)),
            Some(Square::Empty) => Ok(self.apply_move(mv, player)),
        }
    }

    /// Marks the square in place. Returns whether the move was applied;
    /// an illegal move leaves the board unchanged.
    pub fn make_move_in_place(&mut self, mv: Move, player: Player) -> bool {
        match mv.index() {
            Some(i) if self.squares[i] == Square::Empty => {
                self.squares[i] = Square::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Player with three in a row, if any.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// No winner and no empty square.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Winner or tie.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Checks winner first, then tie.
    pub fn outcome(&self) -> Outcome {
        match self.check_winner() {
            Some(player) => Outcome::Winner(player),
            None if rules::is_full(self) => Outcome::Tie,
            None => Outcome::Undetermined,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order. `X`/`O` are marks (either
    /// case), `.`, `_` and `-` are empty; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELLS] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount(cells.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.available_moves(), Move::ALL.to_vec());
        assert_eq!(board.outcome(), Outcome::Undetermined);
    }

    #[test]
    fn test_available_moves_row_major() {
        let board: Board = "X.O .X. O..".parse().unwrap();
        assert_eq!(
            board.available_moves(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::new();
        let next = board.apply_move(Move::CENTER, Player::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Move::CENTER), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_illegal_apply_is_noop() {
        let board = Board::new().apply_move(Move::CENTER, Player::X);
        assert_eq!(board.apply_move(Move::CENTER, Player::O), board);
        assert_eq!(board.apply_move(Move::new(3, 1), Player::O), board);
    }

    #[test]
    fn test_try_apply_move_reports_reason() {
        let board = Board::new().apply_move(Move::CENTER, Player::X);
        assert_eq!(
            board.try_apply_move(Move::CENTER, Player::O),
            Err(MoveError::Occupied(Move::CENTER))
        );
        assert_eq!(
            board.try_apply_move(Move::new(0, 5), Player::O),
            Err(MoveError::OutOfBounds(Move::new(0, 5)))
        );
        assert!(board.try_apply_move(Move::new(0, 0), Player::O).is_ok());
    }

    #[test]
    fn test_make_move_in_place_reports_success() {
        let mut board = Board::new();
        assert!(board.make_move_in_place(Move::new(2, 2), Player::O));
        assert!(!board.make_move_in_place(Move::new(2, 2), Player::X));
        assert_eq!(board.get(Move::new(2, 2)), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_winner_on_full_board_is_not_tie() {
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert_eq!(board.outcome(), Outcome::Winner(Player::X));
        assert!(board.is_terminal());
        assert!(!board.is_tie());
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "X|X|. / O|O|. / ...".replace('/', "").parse().unwrap();
        assert_eq!(board.to_string(), "X X .\nO O .\n. . .");
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XOX".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(3))
        );
        assert_eq!(
            "XOX OXO XOZ".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_count_marks() {
        let board: Board = "XX. OO. X..".parse().unwrap();
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 2);
    }
}
