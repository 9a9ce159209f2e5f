//! Arena error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ArenaErrorKind {
    /// Reading or writing a file failed.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// Configuration could not be loaded or is inconsistent.
    #[display("Config error: {}", _0)]
    Config(String),

    /// A strategy name or level was not recognised.
    #[display("Unknown strategy {:?} (expected 1-3 or random/heuristic/minimax)", _0)]
    UnknownStrategy(String),

    /// A pairing list entry was not of the form `a,b`.
    #[display("Invalid pairing {:?} (expected e.g. \"1,3\")", _0)]
    InvalidPairing(String),

    /// A row of a results log could not be parsed.
    #[display("Malformed results row at line {}: {}", line, message)]
    MalformedRecord {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// Board or move text could not be parsed.
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// JSON encoding failed.
    #[display("Serialization error: {}", _0)]
    Serialization(String),
}

/// Arena error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct ArenaError {
    /// Error category and details.
    pub kind: ArenaErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ArenaError {
    /// Creates a new arena error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: ArenaErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ArenaError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ArenaErrorKind::Io(err.to_string()))
    }
}

impl From<toml::de::Error> for ArenaError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(ArenaErrorKind::Config(err.to_string()))
    }
}

impl From<serde_json::Error> for ArenaError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ArenaErrorKind::Serialization(err.to_string()))
    }
}

impl From<tictactoe_engine::BoardParseError> for ArenaError {
    #[track_caller]
    fn from(err: tictactoe_engine::BoardParseError) -> Self {
        Self::new(ArenaErrorKind::Parse(err.to_string()))
    }
}

/// Result alias for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;
