//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (conventionally moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the player who acts after this one.
    ///
    /// Applying `next` twice returns the original player.
    pub fn next(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// State of a board with respect to the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player has three in a row.
    Winner(Player),
    /// The board is full and nobody has a line.
    Tie,
    /// The game can continue.
    Undetermined,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie | Outcome::Undetermined => None,
        }
    }

    /// True for `Winner` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undetermined)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Undetermined => write!(f, "In progress"),
        }
    }
}
