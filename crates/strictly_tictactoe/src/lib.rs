//! Strictly Tic-Tac-Toe - game engine, rules and score persistence.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] owns the board, the player to move and the scores,
//!   and notifies observers registered with [`Game::on_result`]
//! - **Rules**: pure functions in [`rules`] for win and draw detection
//! - **Scores**: [`ScoreTracker`] loads and saves [`Scores`] through any
//!   [`ScoreStore`], swallowing failures
//! - **Session**: [`GameSession`] dispatches [`GameCommand`]s and pushes a
//!   [`BoardView`] into a [`BoardDisplay`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, MoveOutcome, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 4, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! let outcome = game.apply_move(8).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Win(line) if line.player == Player::X));
//! assert_eq!(game.scores().x, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod scores;
mod session;
mod store;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use game::Game;
pub use position::Position;
pub use rules::WinningLine;
pub use scores::{SCORES_KEY, ScoreTracker, Scores};
pub use session::{BoardDisplay, BoardView, CellView, GameCommand, GameSession};
pub use store::{FileStore, MemoryStore, ScoreStore, ScoreStoreError, ScoreStoreErrorKind};
pub use types::{Board, GameStatus, Player, Square};
