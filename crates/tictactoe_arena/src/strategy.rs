//! Strategy selector: which policy plays a side.

use crate::error::{ArenaError, ArenaErrorKind};
use crate::policy::{HeuristicPolicy, MinimaxPolicy, Policy, RandomPolicy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// The three policy tiers, numbered by level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Level 1: uniform-random legal move.
    Random,
    /// Level 2: win, block, centre, corner, anything.
    Heuristic,
    /// Level 3: exhaustive alpha-beta search.
    Minimax,
}

impl Strategy {
    /// Numeric level (1-3) used in results logs.
    pub fn level(self) -> u8 {
        match self {
            Strategy::Random => 1,
            Strategy::Heuristic => 2,
            Strategy::Minimax => 3,
        }
    }

    /// Strategy for a numeric level.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Strategy::Random),
            2 => Some(Strategy::Heuristic),
            3 => Some(Strategy::Minimax),
            _ => None,
        }
    }

    /// Instantiates the policy.
    ///
    /// `seed` drives the random choices of [`Strategy::Random`] and
    /// [`Strategy::Heuristic`]; without one the generator is seeded from
    /// the operating system. Minimax ignores it.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            Strategy::Random => Box::new(match seed {
                Some(seed) => RandomPolicy::seeded(seed),
                None => RandomPolicy::from_entropy(),
            }),
            Strategy::Heuristic => Box::new(match seed {
                Some(seed) => HeuristicPolicy::seeded(seed),
                None => HeuristicPolicy::from_entropy(),
            }),
            Strategy::Minimax => Box::new(MinimaxPolicy::new()),
        }
    }
}

impl FromStr for Strategy {
    type Err = ArenaError;

    /// Accepts a level (`1`-`3`) or a name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Strategy::from_level(level)
                .ok_or_else(|| ArenaError::new(ArenaErrorKind::UnknownStrategy(s.to_string())));
        }
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "heuristic" => Ok(Strategy::Heuristic),
            "minimax" => Ok(Strategy::Minimax),
            _ => Err(ArenaError::new(ArenaErrorKind::UnknownStrategy(s.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use tictactoe_engine::{Board, Player};

    #[test]
    fn test_levels_round_trip() {
        for strategy in Strategy::iter() {
            assert_eq!(Strategy::from_level(strategy.level()), Some(strategy));
        }
        assert_eq!(Strategy::from_level(0), None);
        assert_eq!(Strategy::from_level(4), None);
    }

    #[test]
    fn test_parse_level_or_name() {
        assert_eq!("1".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!(" Heuristic ".parse::<Strategy>().unwrap(), Strategy::Heuristic);
        assert_eq!("3".parse::<Strategy>().unwrap(), Strategy::Minimax);
        let err = "7".parse::<Strategy>().unwrap_err();
        assert_eq!(err.kind, ArenaErrorKind::UnknownStrategy("7".to_string()));
        assert!("alphazero".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Strategy::Minimax.to_string(), "minimax");
    }

    #[test]
    fn test_built_policy_names() {
        for strategy in Strategy::iter() {
            let mut policy = strategy.build(Some(3));
            assert_eq!(policy.name(), strategy.to_string());
            assert!(policy.select_move(&Board::new(), Player::X).is_some());
        }
    }
}
