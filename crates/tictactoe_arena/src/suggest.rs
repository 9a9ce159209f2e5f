//! Engine analysis of a single position.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Player, Pruning, ScoredMove, Searcher};
use tracing::instrument;

/// Scored moves for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Position analysed.
    pub board: Board,
    /// Side to move.
    pub player: Player,
    /// Every legal move with its score, row-major.
    pub moves: Vec<ScoredMove>,
    /// Move the engine would play.
    pub best: Option<ScoredMove>,
    /// Search nodes visited.
    pub nodes: u64,
    /// Pruning mode used.
    pub pruning: Pruning,
}

/// Scores every move for `player` and picks the engine's choice.
#[instrument(skip(board), fields(position = %board))]
pub fn suggest(board: &Board, player: Player, pruning: Pruning) -> Suggestion {
    let mut searcher = Searcher::with_pruning(pruning);
    let moves = if board.is_terminal() {
        Vec::new()
    } else {
        searcher.score_moves(board, player)
    };
    let best = ScoredMove::best(moves.iter().copied());
    Suggestion {
        board: *board,
        player,
        moves,
        best,
        nodes: searcher.nodes(),
        pruning,
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "{} to move ({} search, {} nodes)", self.player, self.pruning, self.nodes)?;
        for scored in &self.moves {
            let verdict = match scored.score.signum() {
                1 => "win",
                0 => "tie",
                _ => "loss",
            };
            writeln!(f, "  {} {:<14} {:>2} {}", scored.mv, scored.mv.label(), scored.score, verdict)?;
        }
        match self.best {
            Some(best) => write!(f, "Best: {} {}", best.mv, best.mv.label()),
            None => write!(f, "No moves available ({})", self.board.outcome()),
        }
    }
}
