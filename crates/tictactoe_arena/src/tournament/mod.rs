//! AI-vs-AI tournaments.

mod config;
mod pairing;
mod record;

pub use config::TournamentConfig;
pub use pairing::{Pairing, StartMode};
pub use record::{CsvWriter, HEADER, MatchRecord, RecordSink};

use crate::error::ArenaResult;
use crate::game::play_game;
use crate::report::Report;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Plays every configured pairing and hands each game to `sink`.
///
/// Returns the same games aggregated per pairing. With a seed, the random
/// policies of pairing `i` use `seed + 2i` (X) and `seed + 2i + 1` (O).
#[instrument(skip_all, fields(games = config.games(), start = %config.start()))]
pub fn run_tournament(
    config: &TournamentConfig,
    sink: &mut dyn RecordSink,
) -> ArenaResult<Report> {
    let mut report = Report::new();

    for (i, pairing) in config.pairings().into_iter().enumerate() {
        let seed_for = |side: u64| config.seed().map(|s| s.wrapping_add(2 * i as u64 + side));
        let mut x = pairing.x.build(seed_for(0));
        let mut o = pairing.o.build(seed_for(1));

        for (starting, games) in config.start().schedule(*config.games()) {
            info!(%pairing, %starting, games, "Running games");
            for _ in 0..games {
                let started = Instant::now();
                let game = play_game(&mut *x, &mut *o, starting);
                let record = MatchRecord {
                    x_level: pairing.x.level(),
                    o_level: pairing.o.level(),
                    starting_player: starting,
                    winner: game.winner(),
                    moves: game.moves,
                    duration_s: started.elapsed().as_secs_f64(),
                };
                debug!(row = %record.to_row(), "Game recorded");
                sink.record(&record)?;
                report.add(&record);
            }
        }
    }

    info!(total = report.total_games(), "Tournament finished");
    Ok(report)
}

/// Runs the tournament and writes the CSV log to the configured path.
#[instrument(skip(config), fields(out = %config.out().display()))]
pub fn run_to_file(config: &TournamentConfig) -> ArenaResult<Report> {
    let file = File::create(config.out())?;
    let mut writer = CsvWriter::new(BufWriter::new(file))?;
    let report = run_tournament(config, &mut writer)?;
    writer.into_inner()?;
    Ok(report)
}
