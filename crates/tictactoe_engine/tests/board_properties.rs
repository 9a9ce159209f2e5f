//! Exhaustive checks of the board model over every cell assignment.

use tictactoe_engine::{Board, CELLS, Move, Player, Square, rules::LINES};

/// Decodes `code` (base 3, cell 0 least significant) into a board text.
fn board_from_code(mut code: u32) -> Board {
    let mut text = String::with_capacity(CELLS);
    for _ in 0..CELLS {
        text.push(match code % 3 {
            0 => '.',
            1 => 'X',
            _ => 'O',
        });
        code /= 3;
    }
    text.parse().expect("generated board text is valid")
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(CELLS as u32)).map(board_from_code)
}

fn has_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|mv| board.get(*mv) == Some(Square::Occupied(player)))
    })
}

/// Moves worth probing: every cell plus a few off-board coordinates.
fn probe_moves() -> Vec<Move> {
    let mut moves = Move::ALL.to_vec();
    moves.extend([Move::new(3, 0), Move::new(0, 3), Move::new(7, 7)]);
    moves
}

#[test]
fn test_win_detection_matches_lines() {
    for board in all_boards() {
        let x = has_line(&board, Player::X);
        let o = has_line(&board, Player::O);
        let winner = board.check_winner();
        match (x, o) {
            (false, false) => assert_eq!(winner, None, "\n{board}"),
            (true, false) => assert_eq!(winner, Some(Player::X), "\n{board}"),
            (false, true) => assert_eq!(winner, Some(Player::O), "\n{board}"),
            // Unreachable in play; any of the two owners is acceptable.
            (true, true) => assert!(winner.is_some(), "\n{board}"),
        }
    }
}

#[test]
fn test_apply_changes_board_iff_legal() {
    for board in all_boards().step_by(7) {
        for mv in probe_moves() {
            for player in [Player::X, Player::O] {
                let next = board.apply_move(mv, player);
                assert_eq!(next != board, board.is_legal_move(mv), "{mv} on\n{board}");

                let mut in_place = board;
                let applied = in_place.make_move_in_place(mv, player);
                assert_eq!(applied, board.is_legal_move(mv));
                assert_eq!(in_place, next);
                assert_eq!(board.try_apply_move(mv, player).is_ok(), applied);
            }
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in all_boards() {
        let expected = board.check_winner().is_some() || board.available_moves().is_empty();
        assert_eq!(board.is_terminal(), expected, "\n{board}");
        assert_eq!(
            board.is_tie(),
            board.check_winner().is_none() && board.available_moves().is_empty()
        );
    }
}

#[test]
fn test_available_moves_are_legal_and_ordered() {
    for board in all_boards().step_by(11) {
        let moves = board.available_moves();
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|mv| board.is_legal_move(*mv)));
        let empty = board.squares().iter().filter(|s| **s == Square::Empty).count();
        assert_eq!(moves.len(), empty);
    }
}
