//! Exhaustive adversarial search.
//!
//! Scores are ternary and taken from the searching player's side:
//! [`WIN`], [`TIE`] or [`LOSS`]. There is no depth discount, so a win in
//! one ply scores the same as a win in five.

#[cfg(feature = "parallel")]
mod parallel;

use crate::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome score from the searching player's perspective.
pub type Score = i32;

/// The searching player eventually wins.
pub const WIN: Score = 1;
/// Optimal play ends in a tie.
pub const TIE: Score = 0;
/// The opponent eventually wins.
pub const LOSS: Score = -1;

/// Lower bound of the initial window.
pub const NEG_INFINITY: Score = Score::MIN;
/// Upper bound of the initial window.
pub const INFINITY: Score = Score::MAX;

/// Whether sibling moves may be cut off once the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum Pruning {
    /// Alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Plain minimax over the whole tree.
    Disabled,
}

/// A move together with its exact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate move.
    pub mv: Move,
    /// Score after both sides play optimally from here.
    pub score: Score,
}

impl ScoredMove {
    /// First entry with the strictly greatest score.
    pub fn best(scored: impl IntoIterator<Item = ScoredMove>) -> Option<ScoredMove> {
        scored.into_iter().fold(None, |best, candidate| match best {
            Some(b) if b.score >= candidate.score => Some(b),
            _ => Some(candidate),
        })
    }
}

/// Minimax searcher.
///
/// Holds no game state between calls, only the pruning mode and a count of
/// the nodes visited since construction (or the last [`Searcher::reset`]).
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pruning: Pruning,
    nodes: u64,
}

impl Searcher {
    /// Alpha-beta searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Searcher with an explicit pruning mode.
    pub fn with_pruning(pruning: Pruning) -> Self {
        Self { pruning, nodes: 0 }
    }

    /// Unpruned minimax.
    pub fn exhaustive() -> Self {
        Self::with_pruning(Pruning::Disabled)
    }

    /// The pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Nodes visited by [`Searcher::search`] so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Clears the node counter.
    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Picks the move that maximizes `player`'s guaranteed outcome.
    ///
    /// Returns `None` when the board has no empty square and the sole move
    /// without searching when only one is left. Otherwise the first move in
    /// row-major order with the strictly greatest score wins.
    #[instrument(skip(self, board), fields(pruning = %self.pruning))]
    pub fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let moves = board.available_moves();
        match moves.as_slice() {
            [] => {
                debug!("No moves available");
                None
            }
            [only] => {
                debug!(mv = %only, "Single move available");
                Some(*only)
            }
            _ => {
                let before = self.nodes;
                let best = self.best_move(board, player)?;
                debug!(
                    mv = %best.mv,
                    score = best.score,
                    nodes = self.nodes - before,
                    "Search selected move"
                );
                Some(best.mv)
            }
        }
    }

    /// Best scored move, searching even when only one move exists.
    ///
    /// With [`Pruning::AlphaBeta`] alpha is carried across top-level moves.
    /// A later move that cannot beat the current best only gets a bound,
    /// but the returned move and its score are exact.
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<ScoredMove> {
        if self.pruning == Pruning::Disabled {
            return ScoredMove::best(self.score_moves(board, player));
        }

        let mut alpha = NEG_INFINITY;
        let mut best: Option<ScoredMove> = None;
        for mv in board.moves() {
            let child = board.apply_move(mv, player);
            let score = self.search(&child, player.next(), player, alpha, INFINITY, false);
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredMove { mv, score });
            }
            alpha = alpha.max(score);
        }
        best
    }

    /// Every available move with its exact score, in row-major order.
    ///
    /// Each top-level move is searched with a full window, so the scores
    /// do not depend on the pruning mode.
    pub fn score_moves(&mut self, board: &Board, player: Player) -> Vec<ScoredMove> {
        board
            .available_moves()
            .into_iter()
            .map(|mv| ScoredMove {
                mv,
                score: self.score_move(board, mv, player),
            })
            .collect()
    }

    /// Score of `player` playing `mv` followed by the opponent's best reply.
    pub fn score_move(&mut self, board: &Board, mv: Move, player: Player) -> Score {
        let child = board.apply_move(mv, player);
        self.search(&child, player.next(), player, NEG_INFINITY, INFINITY, false)
    }

    /// Recursive minimax over `board` with `acting` to move.
    ///
    /// The maximizing levels are the ones where `searching` acts. With
    /// [`Pruning::AlphaBeta`] remaining siblings are skipped once
    /// `beta <= alpha`; the returned value is then a bound rather than the
    /// exact score, which cannot change the choice one level up.
    pub fn search(
        &mut self,
        board: &Board,
        acting: Player,
        searching: Player,
        mut alpha: Score,
        mut beta: Score,
        is_maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        // Winner before tie: a full board with a line scores +-1.
        if let Some(winner) = board.check_winner() {
            return if winner == searching { WIN } else { LOSS };
        }
        if board.is_tie() {
            return TIE;
        }

        let prune = self.pruning == Pruning::AlphaBeta;

        if is_maximizing {
            let mut best = NEG_INFINITY;
            for mv in board.moves() {
                let child = board.apply_move(mv, acting);
                let score = self.search(&child, acting.next(), searching, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if prune && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in board.moves() {
                let child = board.apply_move(mv, acting);
                let score = self.search(&child, acting.next(), searching, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if prune && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Selects a move for `player` with a fresh alpha-beta searcher.
pub fn select_move(board: &Board, player: Player) -> Option<Move> {
    Searcher::new().select_move(board, player)
}
