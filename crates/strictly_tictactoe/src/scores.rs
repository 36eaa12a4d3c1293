//! Win/tie counters and their best-effort persistence.

use super::store::ScoreStore;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Key under which the score record is stored.
pub const SCORES_KEY: &str = "ticTacToeScores";

/// Running win and tie counts.
///
/// Serializes as `{"X": .., "O": .., "ties": ..}`; missing fields read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    /// Games won by X.
    #[serde(rename = "X")]
    pub x: u32,
    /// Games won by O.
    #[serde(rename = "O")]
    pub o: u32,
    /// Games tied.
    pub ties: u32,
}

impl Scores {
    /// Returns the win count for a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        let count = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *count = count.saturating_add(1);
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties = self.ties.saturating_add(1);
    }
}

/// Loads and saves [`Scores`] through a key-value store.
///
/// Neither direction surfaces errors: a failed or corrupt read yields zeroed
/// scores and a failed write is skipped, both with a warning.
#[derive(Debug, Getters)]
pub struct ScoreTracker<S> {
    store: S,
    key: String,
}

impl<S: ScoreStore> ScoreTracker<S> {
    /// Creates a tracker using [`SCORES_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, SCORES_KEY)
    }

    /// Creates a tracker using a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Reads the persisted scores, defaulting to zero on any failure.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Scores {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved scores");
                return Scores::default();
            }
            Err(err) => {
                warn!(error = %err, "Could not load scores");
                return Scores::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(scores) => {
                debug!(?scores, "Loaded scores");
                scores
            }
            Err(err) => {
                warn!(error = %err, "Saved scores are malformed, starting from zero");
                Scores::default()
            }
        }
    }

    /// Writes the full score record, logging and skipping on failure.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn save(&mut self, scores: &Scores) {
        let raw = match serde_json::to_string(scores) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "Could not encode scores");
                return;
            }
        };

        if let Err(err) = self.store.set(&self.key, &raw) {
            warn!(error = %err, "Could not save scores");
        } else {
            debug!("Saved scores");
        }
    }
}
