//! Tic-tac-toe arena - unified CLI
//!
//! Runs tournaments, summarises their logs and analyses positions.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_arena::{
    Pairing, Report, StartMode, TournamentConfig, run_to_file, suggest,
};
use tictactoe_engine::{Board, Player, Pruning};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tourney {
            config,
            games,
            pairs,
            out,
            start,
            seed,
        } => run_tourney(config, games, pairs, out, start, seed),
        Command::Report { csvfile } => run_report(csvfile),
        Command::Suggest {
            board,
            player,
            no_prune,
            json,
        } => run_suggest(board, player, no_prune, json),
    }
}

/// Run a tournament and write the CSV log
#[instrument]
fn run_tourney(
    config_path: Option<PathBuf>,
    games: Option<u32>,
    pairs: Option<String>,
    out: Option<PathBuf>,
    start: Option<StartMode>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => TournamentConfig::from_file(path)?,
        None => TournamentConfig::default(),
    };

    if let Some(games) = games {
        config = config.with_games(games);
    }
    if let Some(pairs) = pairs {
        config = config.with_pairs(Pairing::parse_list(&pairs)?);
    }
    if let Some(out) = out {
        config = config.with_out(out);
    }
    if let Some(start) = start {
        config = config.with_start(start);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    info!(?config, "Starting tournament");
    let report = run_to_file(&config)?;
    print!("{}", report);
    println!("Tournament finished -> {}", config.out().display());
    Ok(())
}

/// Summarise a CSV log
#[instrument]
fn run_report(csvfile: PathBuf) -> Result<()> {
    let report = Report::load(&csvfile)?;
    print!("{}", report);
    Ok(())
}

/// Print the engine's scores for a position
#[instrument]
fn run_suggest(board: Board, player: Player, no_prune: bool, json: bool) -> Result<()> {
    let pruning = if no_prune {
        Pruning::Disabled
    } else {
        Pruning::AlphaBeta
    };
    let suggestion = suggest(&board, player, pruning);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", suggestion);
    }
    Ok(())
}
