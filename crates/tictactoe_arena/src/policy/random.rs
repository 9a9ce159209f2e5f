//! Uniform-random policy.

use super::Policy;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{Board, Move, Player};
use tracing::trace;

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a policy with a reproducible move sequence.
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

impl Policy for RandomPolicy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let mv = board.available_moves().choose(&mut self.rng).copied();
        trace!(player = %player, mv = ?mv, "Random move");
        mv
    }

    fn name(&self) -> &str {
        "random"
    }
}
