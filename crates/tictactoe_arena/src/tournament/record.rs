//! One row of the results log.

use crate::error::{ArenaError, ArenaErrorKind, ArenaResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tictactoe_engine::Player;

/// Column names, in order.
pub const HEADER: [&str; 6] = [
    "ai_X_level",
    "ai_O_level",
    "starting_player",
    "winner",
    "moves",
    "duration_s",
];

/// Text used for a drawn game in the `winner` column.
pub const TIE: &str = "Tie";

/// A single game as logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Level of the strategy playing X.
    pub x_level: u8,
    /// Level of the strategy playing O.
    pub o_level: u8,
    /// Side that moved first.
    pub starting_player: Player,
    /// Winning side, `None` for a tie.
    pub winner: Option<Player>,
    /// Move attempts in the game.
    pub moves: u32,
    /// Wall-clock time of the game in seconds.
    pub duration_s: f64,
}

impl MatchRecord {
    /// Formats the record as a CSV row without trailing newline.
    pub fn to_row(&self) -> String {
        let winner = self
            .winner
            .map_or_else(|| TIE.to_string(), |p| p.to_string());
        format!(
            "{},{},{},{},{},{:.6}",
            self.x_level, self.o_level, self.starting_player, winner, self.moves, self.duration_s
        )
    }

    /// Parses a CSV row. `line` is the 1-based line number for errors.
    pub fn parse_row(row: &str, line: usize) -> ArenaResult<Self> {
        let bad = |message: String| ArenaError::new(ArenaErrorKind::MalformedRecord { line, message });

        let fields: Vec<&str> = row.trim().split(',').map(str::trim).collect();
        let &[x_level, o_level, starting, winner, moves, duration] = fields.as_slice() else {
            return Err(bad(format!(
                "expected {} fields, found {}",
                HEADER.len(),
                fields.len()
            )));
        };

        let level = |s: &str| {
            s.parse::<u8>()
                .map_err(|_| bad(format!("invalid level {:?}", s)))
        };
        let player = |s: &str| {
            s.parse::<Player>()
                .map_err(|_| bad(format!("invalid player {:?}", s)))
        };

        Ok(Self {
            x_level: level(x_level)?,
            o_level: level(o_level)?,
            starting_player: player(starting)?,
            winner: if winner.eq_ignore_ascii_case(TIE) {
                None
            } else {
                Some(player(winner)?)
            },
            moves: moves
                .parse()
                .map_err(|_| bad(format!("invalid move count {:?}", moves)))?,
            duration_s: duration
                .parse()
                .map_err(|_| bad(format!("invalid duration {:?}", duration)))?,
        })
    }
}

/// Destination for match records.
pub trait RecordSink {
    /// Stores one record.
    fn record(&mut self, record: &MatchRecord) -> ArenaResult<()>;
}

impl RecordSink for Vec<MatchRecord> {
    fn record(&mut self, record: &MatchRecord) -> ArenaResult<()> {
        self.push(*record);
        Ok(())
    }
}

/// Writes records as CSV, header first.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    /// Wraps `inner` and writes the header line.
    pub fn new(mut inner: W) -> ArenaResult<Self> {
        writeln!(inner, "{}", HEADER.join(","))?;
        Ok(Self { inner })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> ArenaResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> RecordSink for CsvWriter<W> {
    fn record(&mut self, record: &MatchRecord) -> ArenaResult<()> {
        writeln!(self.inner, "{}", record.to_row())?;
        Ok(())
    }
}
