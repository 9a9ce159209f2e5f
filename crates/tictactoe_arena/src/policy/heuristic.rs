//! Hand-coded priority policy.

use super::Policy;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{Board, Move, Player};
use tracing::trace;

/// Plays the first applicable rule:
///
/// 1. complete one of its own lines,
/// 2. block an opponent line,
/// 3. take the centre,
/// 4. take a random free corner,
/// 5. take a random remaining square.
///
/// Rules 1 and 2 take the first square in row-major order.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy {
    rng: ChaCha8Rng,
}

impl HeuristicPolicy {
    /// Creates a policy with reproducible corner and fallback picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a policy seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

/// First empty square that gives `player` three in a row.
fn completing_move(board: &Board, player: Player) -> Option<Move> {
    board
        .moves()
        .find(|mv| board.apply_move(*mv, player).check_winner() == Some(player))
}

impl Policy for HeuristicPolicy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let corners: Vec<Move> = Move::CORNERS
            .into_iter()
            .filter(|mv| board.is_legal_move(*mv))
            .collect();

        let (mv, rule) = if let Some(mv) = completing_move(board, player) {
            (mv, "win")
        } else if let Some(mv) = completing_move(board, player.next()) {
            (mv, "block")
        } else if board.is_legal_move(Move::CENTER) {
            (Move::CENTER, "center")
        } else if let Some(mv) = corners.choose(&mut self.rng) {
            (*mv, "corner")
        } else {
            (*board.available_moves().choose(&mut self.rng)?, "any")
        };
        trace!(player = %player, mv = %mv, rule, "Heuristic move");
        Some(mv)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
