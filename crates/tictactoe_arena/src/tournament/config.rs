//! Tournament configuration.

use super::pairing::{Pairing, StartMode};
use crate::error::{ArenaError, ArenaErrorKind, ArenaResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a tournament run.
///
/// Loaded from TOML; every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Games per pairing.
    #[serde(default = "default_games")]
    games: u32,

    /// Pairings to play; all nine when empty.
    #[serde(default)]
    pairs: Vec<Pairing>,

    /// Who starts each game.
    #[serde(default)]
    start: StartMode,

    /// Base seed for random policies; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Results log path.
    #[serde(default = "default_out")]
    out: PathBuf,
}

#[instrument]
fn default_games() -> u32 {
    200
}

#[instrument]
fn default_out() -> PathBuf {
    PathBuf::from("tourney_results.csv")
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            pairs: Vec::new(),
            start: StartMode::default(),
            seed: None,
            out: default_out(),
        }
    }
}

impl TournamentConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ArenaResult<Self> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ArenaError::new(ArenaErrorKind::Config(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;
        let config: Self = toml::from_str(&content)?;
        info!(games = config.games, pairs = config.pairs.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Pairings to play, resolving an empty list to all nine.
    pub fn pairings(&self) -> Vec<Pairing> {
        if self.pairs.is_empty() {
            Pairing::all()
        } else {
            self.pairs.clone()
        }
    }

    /// Overrides the number of games per pairing.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Overrides the pairings.
    pub fn with_pairs(mut self, pairs: Vec<Pairing>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Overrides the start mode.
    pub fn with_start(mut self, start: StartMode) -> Self {
        self.start = start;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the output path.
    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = out.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        let config = TournamentConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TournamentConfig::default());
        assert_eq!(config.pairings().len(), 9);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
games = 10
start = "x"
seed = 99
out = "results.csv"

[[pairs]]
x = "minimax"
o = "random"
"#
        )
        .unwrap();

        let config = TournamentConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.games(), 10);
        assert_eq!(*config.start(), StartMode::X);
        assert_eq!(*config.seed(), Some(99));
        assert_eq!(config.out(), &PathBuf::from("results.csv"));
        assert_eq!(
            config.pairings(),
            vec![Pairing::new(Strategy::Minimax, Strategy::Random)]
        );
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TournamentConfig::from_file("/nonexistent/arena.toml").unwrap_err();
        assert!(matches!(err.kind, ArenaErrorKind::Config(_)));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "games = \"many\"").unwrap();
        let err = TournamentConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err.kind, ArenaErrorKind::Config(_)));
    }
}
