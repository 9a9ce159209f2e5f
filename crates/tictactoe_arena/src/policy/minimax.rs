//! Exhaustive search policy.

use super::Policy;
use tictactoe_engine::{Board, Move, Player, Pruning, Searcher};

/// Plays the engine's optimal move.
#[derive(Debug, Clone, Default)]
pub struct MinimaxPolicy {
    searcher: Searcher,
}

impl MinimaxPolicy {
    /// Alpha-beta policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy with an explicit pruning mode.
    pub fn with_pruning(pruning: Pruning) -> Self {
        Self {
            searcher: Searcher::with_pruning(pruning),
        }
    }

    /// Nodes searched over the policy's lifetime.
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}

impl Policy for MinimaxPolicy {
    #[cfg(not(feature = "parallel"))]
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.searcher.select_move(board, player)
    }

    #[cfg(feature = "parallel")]
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.searcher.par_select_move(board, player)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
