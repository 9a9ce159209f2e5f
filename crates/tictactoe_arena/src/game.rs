//! Plays one game between two policies.

use crate::policy::Policy;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Outcome, Player};
use tracing::{debug, instrument, warn};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// `Winner` or `Tie`; never `Undetermined`.
    pub outcome: Outcome,
    /// Moves proposed, including an illegal one that forfeited the game.
    /// A policy that proposes nothing adds no move.
    pub moves: u32,
    /// Side that forfeited by returning an illegal move or none.
    pub forfeit: Option<Player>,
    /// Final position.
    pub board: Board,
}

impl GameRecord {
    /// The winning side, `None` for a tie.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    fn forfeited(loser: Player, moves: u32, board: Board) -> Self {
        Self {
            outcome: Outcome::Winner(loser.next()),
            moves,
            forfeit: Some(loser),
            board,
        }
    }
}

/// Plays from an empty board until one side wins, the board fills, or a
/// policy forfeits.
#[instrument(skip(x, o), fields(x_policy = x.name(), o_policy = o.name()))]
pub fn play_game(x: &mut dyn Policy, o: &mut dyn Policy, starting: Player) -> GameRecord {
    let mut board = Board::new();
    let mut current = starting;
    let mut moves = 0;

    loop {
        let policy: &mut dyn Policy = match current {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let Some(mv) = policy.select_move(&board, current) else {
            warn!(player = %current, policy = policy.name(), "Policy produced no move, forfeiting");
            return GameRecord::forfeited(current, moves, board);
        };
        moves += 1;

        if !board.make_move_in_place(mv, current) {
            warn!(
                player = %current,
                policy = policy.name(),
                %mv,
                "Policy produced an illegal move, forfeiting"
            );
            return GameRecord::forfeited(current, moves, board);
        }

        let outcome = board.outcome();
        if outcome.is_terminal() {
            debug!(%outcome, moves, "Game finished");
            return GameRecord {
                outcome,
                moves,
                forfeit: None,
                board,
            };
        }

        current = current.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{HeuristicPolicy, MinimaxPolicy, RandomPolicy};
    use tictactoe_engine::Move;

    /// Always plays the same square.
    struct Stubborn(Move);

    impl Policy for Stubborn {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    /// Never answers.
    struct Silent;

    impl Policy for Silent {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            None
        }

        fn name(&self) -> &str {
            "silent"
        }
    }

    #[test]
    fn test_minimax_self_play_ties_in_nine() {
        let record = play_game(&mut MinimaxPolicy::new(), &mut MinimaxPolicy::new(), Player::X);
        assert_eq!(record.outcome, Outcome::Tie);
        assert_eq!(record.moves, 9);
        assert_eq!(record.forfeit, None);
    }

    #[test]
    fn test_repeated_square_forfeits() {
        let record = play_game(
            &mut Stubborn(Move::CENTER),
            &mut Stubborn(Move::CENTER),
            Player::X,
        );
        assert_eq!(record.outcome, Outcome::Winner(Player::X));
        assert_eq!(record.forfeit, Some(Player::O));
        assert_eq!(record.moves, 2);
    }

    #[test]
    fn test_no_move_forfeits() {
        let record = play_game(&mut Silent, &mut HeuristicPolicy::seeded(0), Player::X);
        assert_eq!(record.winner(), Some(Player::O));
        assert_eq!(record.forfeit, Some(Player::X));
        assert_eq!(record.moves, 0);
        assert_eq!(record.board, Board::new());
    }

    #[test]
    fn test_o_can_start() {
        let record = play_game(&mut Silent, &mut Stubborn(Move::CENTER), Player::O);
        assert_eq!(record.board.count(Player::O), 1);
        assert_eq!(record.forfeit, Some(Player::X));
        assert_eq!(record.moves, 1);
    }

    #[test]
    fn test_minimax_beats_or_ties_random() {
        for seed in 0..20 {
            let record = play_game(
                &mut RandomPolicy::seeded(seed),
                &mut MinimaxPolicy::new(),
                Player::X,
            );
            assert_ne!(record.winner(), Some(Player::X), "seed {seed}");
            assert!(record.board.is_terminal());
        }
    }
}
