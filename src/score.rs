use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "best.json";

/// Failure loading or writing the best-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable best-score collaborator.
///
/// The game reads `best` once at construction and calls `set_best` from the
/// scoring step of a tick whenever the session score exceeds it. The stored
/// value is monotonically non-decreasing across sessions.
pub trait BestScoreStore {
    fn best(&self) -> Result<u32, ScoreError>;
    fn set_best(&mut self, best: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best: u32,
}

/// Best score persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Store under the platform-correct local data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BestScoreStore for JsonScoreStore {
    /// Returns 0 when the score file does not yet exist (first run).
    fn best(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str::<ScoreFile>(&raw)?.best)
    }

    /// Writes the score file, creating parent directories when needed.
    fn set_best(&mut self, best: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Volatile store for tests and throwaway sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryScoreStore {
    fn best(&self) -> Result<u32, ScoreError> {
        Ok(self.best)
    }

    fn set_best(&mut self, best: u32) -> Result<(), ScoreError> {
        self.best = best;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{BestScoreStore, JsonScoreStore, MemoryScoreStore};

    #[test]
    fn best_score_round_trips_through_the_file() {
        let path = unique_test_path("round_trip");
        let mut store = JsonScoreStore::at_path(path.clone());

        store.set_best(42).expect("score save should succeed");
        let loaded = store.best().expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let store = JsonScoreStore::at_path(path);

        assert_eq!(store.best().expect("missing file should read as 0"), 0);
    }

    #[test]
    fn malformed_score_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = JsonScoreStore::at_path(path.clone());
        assert!(store.best().is_err(), "malformed file should return Err");

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_keeps_the_latest_value() {
        let mut store = MemoryScoreStore::new(3);

        store.set_best(9).expect("memory store never fails");

        assert_eq!(store.best().expect("memory store never fails"), 9);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
