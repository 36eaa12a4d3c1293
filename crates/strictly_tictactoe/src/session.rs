//! Command dispatch and display sink for the game board.

use super::action::{MoveError, MoveOutcome};
use super::game::Game;
use super::position::Position;
use super::scores::{ScoreTracker, Scores};
use super::store::ScoreStore;
use super::types::{GameStatus, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A discrete input from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCommand {
    /// Select the cell at this index (0-8).
    SelectCell(usize),
    /// Start a new round.
    Reset,
}

/// Render state of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CellView {
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// True if the cell is part of the winning line.
    pub winning: bool,
    /// True if the cell accepts a move.
    pub enabled: bool,
    /// Accessible label, e.g. `"Cell 1, empty"`.
    pub label: String,
}

/// Everything a board display needs after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cells in index order.
    pub cells: Vec<CellView>,
    /// Status line, e.g. `"Current Player: X"`.
    pub status: String,
    /// Announcement of the last finished game, if any.
    pub announcement: Option<String>,
    /// Player to move (or the winner, once won).
    pub current_player: Player,
    /// True while moves are accepted.
    pub active: bool,
    /// Running scores.
    pub scores: Scores,
}

impl BoardView {
    /// Builds the view of a game.
    #[instrument(skip(game))]
    pub fn of(game: &Game, announcement: Option<String>) -> Self {
        let line = match game.status() {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        };
        let cells = Position::ALL
            .into_iter()
            .map(|pos| {
                let square = game.board().get(pos);
                CellView::new(
                    square.player(),
                    line.is_some_and(|l| l.contains(pos)),
                    game.is_active() && square.player().is_none(),
                    pos.cell_label(square),
                )
            })
            .collect();

        Self {
            cells,
            status: game.status_text(),
            announcement,
            current_player: game.current_player(),
            active: game.is_active(),
            scores: *game.scores(),
        }
    }
}

/// Receives a [`BoardView`] after every game command.
pub trait BoardDisplay {
    /// Shows the view.
    fn show(&mut self, view: &BoardView);
}

impl<F: FnMut(&BoardView)> BoardDisplay for F {
    fn show(&mut self, view: &BoardView) {
        self(view)
    }
}

/// An owned game wired to a display and a score store.
///
/// Scores are loaded once at construction and saved after every finished
/// game through an observer on the engine.
#[derive(Debug)]
pub struct GameSession<D> {
    game: Game,
    display: D,
    announcement: Option<String>,
}

impl<D: BoardDisplay> GameSession<D> {
    /// Loads scores from the tracker, wires saving, and shows the board.
    #[instrument(skip_all)]
    pub fn new<S: ScoreStore + 'static>(display: D, mut tracker: ScoreTracker<S>) -> Self {
        let scores = tracker.load();
        info!(x = scores.x, o = scores.o, ties = scores.ties, "Starting game session");

        let mut game = Game::with_scores(scores);
        game.on_result(move |outcome, scores| {
            if outcome.is_terminal() {
                tracker.save(scores);
            }
        });

        let mut session = Self {
            game,
            display,
            announcement: None,
        };
        session.refresh();
        session
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Applies a command and pushes the new view to the display.
    ///
    /// Rejected moves leave the game unchanged; the view is still refreshed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: GameCommand) -> Result<Option<MoveOutcome>, MoveError> {
        let result = match command {
            GameCommand::SelectCell(index) => self.game.apply_move(index).map(Some),
            GameCommand::Reset => {
                self.game.reset();
                self.announcement = None;
                Ok(None)
            }
        };

        match &result {
            Ok(Some(outcome)) => {
                if let Some(announcement) = outcome.announcement() {
                    self.announcement = Some(announcement);
                }
            }
            Ok(None) => {}
            Err(err) => debug!(%err, "Move rejected"),
        }

        self.refresh();
        result
    }

    /// Pushes the current view to the display without changing state.
    pub fn refresh(&mut self) {
        let view = BoardView::of(&self.game, self.announcement.clone());
        self.display.show(&view);
    }
}
