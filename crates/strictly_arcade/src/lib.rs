//! Strictly Arcade - terminal front-end for the calculator and tic-tac-toe.
//!
//! The engines live in `strictly_calculator` and `strictly_tictactoe`; this
//! crate supplies the adapters around them.
//!
//! # Architecture
//!
//! - **Config**: [`ArcadeConfig`] loaded from TOML with per-field defaults
//! - **Keymap**: raw key presses to engine commands
//! - **Timers**: [`ErrorClearTimers`] for the calculator error auto-clear
//! - **TUI**: ratatui screens driving owned engine sessions

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod keymap;
mod logging;
mod timer;
mod tui;

// Crate-level exports - Configuration
pub use config::{ArcadeConfig, ConfigError};

// Crate-level exports - Input adapters
pub use keymap::{UnmappedKey, calculator_command, game_command, replay_calculator_keys};
pub use tui::move_cursor;

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Timers
pub use timer::ErrorClearTimers;

// Crate-level exports - Terminal UI
pub use tui::{run_calculator, run_tictactoe};
