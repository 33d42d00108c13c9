use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "torus-snake";
const SCORE_FILE_NAME: &str = "highscores.json";

/// Failure modes of high-score persistence.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to access the score file: {0}")]
    Io(#[from] io::Error),
    #[error("score file is corrupt: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One high-score slot per rule variant; the two speed curves make their
/// scores incomparable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    classic: u32,
    #[serde(default)]
    leveling: u32,
}

impl ScoreFile {
    fn get(self, leveling: bool) -> u32 {
        if leveling { self.leveling } else { self.classic }
    }

    fn set(&mut self, leveling: bool, score: u32) {
        if leveling {
            self.leveling = score;
        } else {
            self.classic = score;
        }
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the high score for one rule variant.
///
/// Returns `Ok(0)` when the score file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning instead of silently clobbering scores.
pub fn load_high_score(leveling: bool) -> Result<u32, ScoreError> {
    load_from_path(&scores_path(), leveling)
}

/// Saves the high score for one rule variant, preserving the other slot and
/// creating parent directories when needed.
pub fn save_high_score(leveling: bool, score: u32) -> Result<(), ScoreError> {
    save_to_path(&scores_path(), leveling, score)
}

fn read_score_file(path: &Path) -> Result<ScoreFile, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn load_from_path(path: &Path, leveling: bool) -> Result<u32, ScoreError> {
    Ok(read_score_file(path)?.get(leveling))
}

fn save_to_path(path: &Path, leveling: bool, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = read_score_file(path).unwrap_or_default();
    file.set(leveling, score);

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}
