//! Move results and rejections.

use super::{Player, Position, WinningLine};
use serde::{Deserialize, Serialize};

/// The result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game continues; the contained player moves next.
    Continue(Player),
    /// The mover completed a line.
    Win(WinningLine),
    /// The board filled up without a completed line.
    Tie,
}

impl MoveOutcome {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue(_))
    }

    /// Screen-reader announcement for a finished game.
    pub fn announcement(&self) -> Option<String> {
        match self {
            MoveOutcome::Continue(_) => None,
            MoveOutcome::Win(line) => Some(format!("Player {} wins the game!", line.player)),
            MoveOutcome::Tie => Some("The game is a tie!".to_string()),
        }
    }
}

/// Reason a move was rejected. A rejected move leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
