use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "serpent";
const SCORE_FILE_NAME: &str = "highscore.json";

/// Why the high-score file could not be read or written.
///
/// Never fatal: callers log the failure and carry on with an in-memory
/// score of zero.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score.
///
/// Returns `Ok(0)` when the file does not exist yet (first run); `Err` when
/// it exists but cannot be read or parsed.
pub fn load_high_score() -> Result<u32, ScoreError> {
    load_high_score_from_path(&scores_path())
}

/// Saves the high score, creating parent directories when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreError> {
    save_high_score_to_path(&scores_path(), score)
}

fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_high_score_from_path, save_high_score_to_path, ScoreError};

    #[test]
    fn high_score_round_trips_through_the_file() {
        let path = unique_test_path("round_trip");

        save_high_score_to_path(&path, 120).expect("score save should succeed");
        let loaded = load_high_score_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, 120);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_high_score_from_path(&path).expect("missing file should return Ok(0)");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn malformed_score_file_is_a_format_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let result = load_high_score_from_path(&path);
        assert!(matches!(result, Err(ScoreError::Format(_))));

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("serpent-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
