//! Which strategies meet, and who starts.

use crate::error::{ArenaError, ArenaErrorKind, ArenaResult};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tictactoe_engine::Player;

/// An ordered (X strategy, O strategy) match-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pairing {
    /// Strategy playing X.
    pub x: Strategy,
    /// Strategy playing O.
    pub o: Strategy,
}

impl Pairing {
    /// Creates a pairing.
    pub fn new(x: Strategy, o: Strategy) -> Self {
        Self { x, o }
    }

    /// All nine ordered pairs, sorted by (X level, O level).
    pub fn all() -> Vec<Pairing> {
        Strategy::iter()
            .flat_map(|x| Strategy::iter().map(move |o| Pairing::new(x, o)))
            .collect()
    }

    /// Parses `"1,2;1,3"` style lists. Entries may use levels or names;
    /// empty entries are skipped.
    pub fn parse_list(s: &str) -> ArenaResult<Vec<Pairing>> {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (x, o) = part.split_once(',').ok_or_else(|| {
                    ArenaError::new(ArenaErrorKind::InvalidPairing(part.to_string()))
                })?;
                Ok(Pairing::new(x.parse()?, o.parse()?))
            })
            .collect()
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}vs{}", self.x.level(), self.o.level())
    }
}

/// Who moves first in each game of a pairing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StartMode {
    /// X starts every game.
    X,
    /// O starts every game.
    O,
    /// Half the games with X starting, the rest with O starting.
    #[default]
    Alternate,
}

impl StartMode {
    /// Splits `games` into (starting player, count) batches, in play order.
    pub fn schedule(self, games: u32) -> Vec<(Player, u32)> {
        match self {
            StartMode::X => vec![(Player::X, games)],
            StartMode::O => vec![(Player::O, games)],
            StartMode::Alternate => {
                let half = games / 2;
                vec![(Player::X, half), (Player::O, games - half)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_pairings_in_level_order() {
        let all = Pairing::all();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Pairing::new(Strategy::Random, Strategy::Random));
        assert_eq!(all[5], Pairing::new(Strategy::Heuristic, Strategy::Minimax));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_pairing_list() {
        let pairs = Pairing::parse_list("1,2; minimax,3;;").unwrap();
        assert_eq!(
            pairs,
            vec![
                Pairing::new(Strategy::Random, Strategy::Heuristic),
                Pairing::new(Strategy::Minimax, Strategy::Minimax),
            ]
        );
    }

    #[test]
    fn test_parse_pairing_errors() {
        let err = Pairing::parse_list("13").unwrap_err();
        assert_eq!(err.kind, ArenaErrorKind::InvalidPairing("13".to_string()));
        assert!(Pairing::parse_list("1,9").is_err());
    }

    #[test]
    fn test_alternate_schedule_splits_games() {
        assert_eq!(
            StartMode::Alternate.schedule(7),
            vec![(Player::X, 3), (Player::O, 4)]
        );
        assert_eq!(StartMode::O.schedule(5), vec![(Player::O, 5)]);
    }

    #[test]
    fn test_start_mode_parse() {
        assert_eq!(StartMode::from_str("alternate"), Ok(StartMode::Alternate));
        assert_eq!(StartMode::from_str("X"), Ok(StartMode::X));
        assert_eq!(StartMode::Alternate.to_string(), "alternate");
    }
}
