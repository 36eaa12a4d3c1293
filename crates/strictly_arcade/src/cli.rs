//! Command-line interface for strictly_arcade.

use clap::{Parser, Subcommand};

/// Strictly Arcade - calculator and tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_arcade")]
#[command(about = "Four-function calculator and tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive calculator
    Calculator,

    /// Run the interactive tic-tac-toe board
    Tictactoe,

    /// Replay calculator keys (e.g. "2+3*4=") and print the display
    Keys {
        /// Keys to press, in order
        sequence: String,

        /// Print the display after every key, not just the last
        #[arg(long)]
        trace: bool,
    },

    /// Print the persisted tic-tac-toe scores
    Scores,
}
