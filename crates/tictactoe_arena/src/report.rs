//! Aggregates a results log per pairing and per level.

use crate::error::{ArenaError, ArenaErrorKind, ArenaResult};
use crate::tournament::{HEADER, MatchRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{info, instrument};

/// Totals for one (X level, O level) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairingStats {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub ties: u32,
    /// Sum of move counts.
    pub total_moves: u64,
    /// Shortest game.
    pub min_moves: u32,
    /// Longest game.
    pub max_moves: u32,
}

impl PairingStats {
    fn add(&mut self, record: &MatchRecord) {
        match record.winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.ties += 1,
        }
        self.min_moves = if self.games == 0 {
            record.moves
        } else {
            self.min_moves.min(record.moves)
        };
        self.max_moves = self.max_moves.max(record.moves);
        self.total_moves += u64::from(record.moves);
        self.games += 1;
    }

    fn percent(&self, count: u32) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(count) * 100.0 / f64::from(self.games)
        }
    }

    /// Share of games won by X, in percent.
    pub fn x_win_pct(&self) -> f64 {
        self.percent(self.x_wins)
    }

    /// Share of games won by O, in percent.
    pub fn o_win_pct(&self) -> f64 {
        self.percent(self.o_wins)
    }

    /// Share of drawn games, in percent.
    pub fn tie_pct(&self) -> f64 {
        self.percent(self.ties)
    }

    /// Average game length.
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games)
        }
    }
}

/// Totals for one level over every game it played, on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelStats {
    /// Games in which the level played at least one side.
    pub games: u32,
    /// Games the level won.
    pub wins: u32,
    /// Drawn games.
    pub ties: u32,
}

impl LevelStats {
    /// Share of games won, in percent.
    pub fn win_pct(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) * 100.0 / f64::from(self.games)
        }
    }
}

/// Per-pairing statistics keyed by (X level, O level).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pairings: BTreeMap<(u8, u8), PairingStats>,
}

impl Report {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one game.
    pub fn add(&mut self, record: &MatchRecord) {
        self.pairings
            .entry((record.x_level, record.o_level))
            .or_default()
            .add(record);
    }

    /// Builds a report from records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut report = Self::new();
        for record in records {
            report.add(record);
        }
        report
    }

    /// Reads a results log written by the tournament runner.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> ArenaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let report = Self::parse(&content)?;
        info!(pairings = report.pairings.len(), "Results loaded");
        Ok(report)
    }

    /// Parses results log text. The first line must be the header; blank
    /// lines are ignored.
    pub fn parse(content: &str) -> ArenaResult<Self> {
        let mut lines = content.lines().enumerate();
        let header = lines.next().map(|(_, l)| l.trim()).unwrap_or_default();
        if header != HEADER.join(",") {
            return Err(ArenaError::new(ArenaErrorKind::MalformedRecord {
                line: 1,
                message: format!("unexpected header {:?}", header),
            }));
        }

        let mut report = Self::new();
        for (i, row) in lines.filter(|(_, l)| !l.trim().is_empty()) {
            report.add(&MatchRecord::parse_row(row, i + 1)?);
        }
        Ok(report)
    }

    /// Statistics for a pairing, if it was played.
    pub fn get(&self, x_level: u8, o_level: u8) -> Option<&PairingStats> {
        self.pairings.get(&(x_level, o_level))
    }

    /// Pairings in (X level, O level) order.
    pub fn iter(&self) -> impl Iterator<Item = ((u8, u8), &PairingStats)> {
        self.pairings.iter().map(|(k, v)| (*k, v))
    }

    /// Number of games across all pairings.
    pub fn total_games(&self) -> u32 {
        self.pairings.values().map(|s| s.games).sum()
    }

    /// Number of drawn games across all pairings.
    pub fn total_ties(&self) -> u32 {
        self.pairings.values().map(|s| s.ties).sum()
    }

    /// Totals per level. A mirror game counts once for its level.
    pub fn by_level(&self) -> BTreeMap<u8, LevelStats> {
        let mut levels: BTreeMap<u8, LevelStats> = BTreeMap::new();
        for (&(x, o), stats) in &self.pairings {
            let x_entry = levels.entry(x).or_default();
            x_entry.wins += stats.x_wins;
            if x == o {
                x_entry.wins += stats.o_wins;
            }
            x_entry.games += stats.games;
            x_entry.ties += stats.ties;

            if x != o {
                let o_entry = levels.entry(o).or_default();
                o_entry.wins += stats.o_wins;
                o_entry.games += stats.games;
                o_entry.ties += stats.ties;
            }
        }
        levels
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<8} {:>6} {:>8} {:>8} {:>8} {:>7} {:>5} {:>5}",
            "pairing", "games", "X win %", "O win %", "tie %", "moves", "min", "max"
        )?;
        for ((x, o), stats) in self.iter() {
            writeln!(
                f,
                "{:<8} {:>6} {:>8.1} {:>8.1} {:>8.1} {:>7.2} {:>5} {:>5}",
                format!("{}vs{}", x, o),
                stats.games,
                stats.x_win_pct(),
                stats.o_win_pct(),
                stats.tie_pct(),
                stats.mean_moves(),
                stats.min_moves,
                stats.max_moves,
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{:<8} {:>6} {:>8} {:>8}", "level", "games", "wins", "win %")?;
        for (level, stats) in self.by_level() {
            writeln!(
                f,
                "{:<8} {:>6} {:>8} {:>8.1}",
                level,
                stats.games,
                stats.wins,
                stats.win_pct(),
            )?;
        }
        writeln!(f, "ties: {}", self.total_ties())
    }
}
