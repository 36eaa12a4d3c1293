//! Key-value persistence sinks for the score record.

use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Category of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScoreStoreErrorKind {
    /// Reading or writing the backing medium failed.
    #[display("I/O failure")]
    Io,
    /// The stored key is not usable by this store.
    #[display("invalid key")]
    InvalidKey,
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ScoreStoreError {
    /// Failure category.
    pub kind: ScoreStoreErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreStoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ScoreStoreErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ScoreStoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ScoreStoreErrorKind::Io, err.to_string())
    }
}

/// String key-value storage, the shape of a browser's local storage.
pub trait ScoreStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, ScoreStoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ScoreStoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ScoreStoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ScoreStoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ScoreStoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ScoreStoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store keeping each key in `<dir>/<key>.json`.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    #[instrument(skip(self))]
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ScoreStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ScoreStoreError::new(
                ScoreStoreErrorKind::InvalidKey,
                format!("Key {key:?} must be non-empty ASCII alphanumerics, '_' or '-'"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ScoreStore for FileStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, key: &str) -> Result<Option<String>, ScoreStoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored value");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip(self, value), fields(dir = %self.dir.display()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), ScoreStoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;
        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}
