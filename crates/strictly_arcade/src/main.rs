//! Strictly Arcade - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_arcade::{
    ArcadeConfig, init_file_logging, init_stderr_logging, replay_calculator_keys,
    run_calculator, run_tictactoe,
};
use strictly_tictactoe::{FileStore, ScoreTracker};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArcadeConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Calculator => {
            init_file_logging(&config)?;
            run_calculator(&config)
        }
        Command::Tictactoe => {
            init_file_logging(&config)?;
            run_tictactoe(&config)
        }
        Command::Keys { sequence, trace } => {
            init_stderr_logging(&config);
            print_keys(&sequence, trace)
        }
        Command::Scores => {
            init_stderr_logging(&config);
            print_scores(&config);
            Ok(())
        }
    }
}

/// Replay calculator keys and print what the display shows
#[instrument]
fn print_keys(sequence: &str, trace: bool) -> Result<()> {
    let trail = replay_calculator_keys(sequence)?;
    let shown = if trace {
        &trail[..]
    } else {
        &trail[trail.len().saturating_sub(1)..]
    };

    for readout in shown {
        if !readout.previous.is_empty() {
            println!("{}", readout.previous);
        }
        println!("{}", readout.current);
        if trace {
            println!();
        }
    }
    Ok(())
}

/// Print the persisted scores
#[instrument(skip(config))]
fn print_scores(config: &ArcadeConfig) {
    let scores = ScoreTracker::new(FileStore::new(config.scores_dir())).load();
    info!(?scores, "Loaded scores");
    println!("X: {}", scores.x);
    println!("O: {}", scores.o);
    println!("Ties: {}", scores.ties);
}
