//! Policy trait and implementations.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicPolicy;
pub use minimax::MinimaxPolicy;
pub use random::RandomPolicy;

use tictactoe_engine::{Board, Move, Player};

/// Trait for anything that can choose a move.
pub trait Policy: Send {
    /// Chooses a move for `player` on `board`.
    ///
    /// Returns `None` when the policy has nothing to play. The driver does
    /// not trust the answer: an illegal move forfeits the game.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        (**self).select_move(board, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
