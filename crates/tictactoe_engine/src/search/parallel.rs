//! Top-level move evaluation on the rayon pool.

use super::{ScoredMove, Searcher};
use crate::{Board, Move, Player};
use rayon::prelude::*;
use tracing::{debug, instrument};

impl Searcher {
    /// Scores every available move concurrently.
    ///
    /// Each top-level move gets its own searcher and a full window, so the
    /// scores equal [`Searcher::score_moves`]. Results keep row-major order.
    #[instrument(skip(self, board))]
    pub fn par_score_moves(&mut self, board: &Board, player: Player) -> Vec<ScoredMove> {
        let pruning = self.pruning;
        let results: Vec<(ScoredMove, u64)> = board
            .available_moves()
            .into_par_iter()
            .map(|mv| {
                let mut branch = Searcher::with_pruning(pruning);
                let score = branch.score_move(board, mv, player);
                (ScoredMove { mv, score }, branch.nodes())
            })
            .collect();

        let nodes: u64 = results.iter().map(|(_, n)| n).sum();
        self.nodes += nodes;
        debug!(moves = results.len(), nodes, "Parallel evaluation finished");
        results.into_iter().map(|(scored, _)| scored).collect()
    }

    /// [`Searcher::best_move`] over [`Searcher::par_score_moves`].
    pub fn par_best_move(&mut self, board: &Board, player: Player) -> Option<ScoredMove> {
        ScoredMove::best(self.par_score_moves(board, player))
    }

    /// [`Searcher::select_move`] with the top level evaluated concurrently.
    pub fn par_select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        match board.available_moves().as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.par_best_move(board, player).map(|best| best.mv),
        }
    }
}
