//! Tic-tac-toe engine with result observers.

use super::action::{MoveError, MoveOutcome};
use super::position::Position;
use super::rules::{is_full, winning_line};
use super::scores::Scores;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, info, instrument};

type ResultObserver = Box<dyn FnMut(&MoveOutcome, &Scores)>;

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move, the game status and the running
/// scores. Observers registered with [`Game::on_result`] run synchronously
/// after every accepted move, once the state has been updated.
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
    observers: Vec<ResultObserver>,
}

impl Game {
    /// Creates a new game with zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self::with_scores(Scores::default())
    }

    /// Creates a new game continuing from previously recorded scores.
    #[instrument]
    pub fn with_scores(scores: Scores) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scores,
            observers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the running scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Registers an observer called after every accepted move.
    pub fn on_result(&mut self, observer: impl FnMut(&MoveOutcome, &Scores) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark in the cell (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move without changing state if the game is over, the
    /// index is out of bounds, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<MoveOutcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(cell_index).ok_or(MoveError::OutOfBounds(cell_index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.current_player));

        let outcome = if let Some(line) = winning_line(&self.board) {
            self.status = GameStatus::Won(line);
            self.scores.record_win(self.current_player);
            info!(winner = %line.player, line = ?line.indices(), "Game won");
            MoveOutcome::Win(line)
        } else if is_full(&self.board) {
            self.status = GameStatus::Tie;
            self.scores.record_tie();
            info!("Game tied");
            MoveOutcome::Tie
        } else {
            self.current_player = self.current_player.opponent();
            debug!(next = %self.current_player, "Turn passed");
            MoveOutcome::Continue(self.current_player)
        };

        for observer in &mut self.observers {
            observer(&outcome, &self.scores);
        }

        Ok(outcome)
    }

    /// Starts a new round. Scores and observers are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        debug!("Board reset");
    }

    /// Status line for the current state.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Current Player: {}", self.current_player),
            GameStatus::Won(line) => format!("Player {} Wins!", line.player),
            GameStatus::Tie => "It's a Tie!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("status", &self.status)
            .field("scores", &self.scores)
            .field("observers", &self.observers.len())
            .finish()
    }
}
