//! High-score persistence collaborator.
//!
//! Keeps the best score across games in a small JSON file. The simulation
//! core never depends on this module succeeding: a missing or unreadable
//! store simply reads as a zero baseline, and the host decides what to do
//! with a failed write.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    best: u32,
}

/// Loads and stores the best score in a JSON file
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location: the user's home directory, falling back to the
    /// working directory when no home is set.
    pub fn default_path() -> PathBuf {
        let mut path = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default();
        path.push(".cubewell_scores.json");
        path
    }

    /// Best score seen so far.
    ///
    /// Any failure (missing file, unreadable file, malformed JSON) defaults to
    /// the zero baseline; a broken store must never block a game.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HighScoreRecord>(&raw).ok())
            .unwrap_or_default()
            .best
    }

    /// Compare `score` against the stored best and persist an improvement.
    ///
    /// Returns the resulting best score. Only improvements touch the file.
    pub fn record(&self, score: u32) -> Result<u32> {
        let best = self.load();
        if score <= best {
            return Ok(best);
        }

        let raw = serde_json::to_string(&HighScoreRecord { best: score })?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write high score to {}", self.path.display()))?;
        Ok(score)
    }
}
