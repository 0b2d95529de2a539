//! Best-score persistence.
//!
//! The engine only reports `total_score`; this store keeps the best one in a
//! small JSON file. A missing file means no best score yet. An unreadable or
//! corrupt file is logged and treated the same way, so a bad file never stops
//! the game from starting.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
    best: u32,
}

impl BestScoreStore {
    /// Load the stored best score from `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read_best(&path) {
            Ok(best) => best,
            Err(err) => {
                warn!("ignoring best score file: {err:#}");
                0
            }
        };
        debug!("best score {} from {}", best, path.display());
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store `total_score` if it beats the current best.
    ///
    /// Returns whether a new best was written.
    pub fn record(&mut self, total_score: u32) -> Result<bool> {
        if total_score <= self.best {
            return Ok(false);
        }
        self.best = total_score;
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        let doc = BestScoreFile {
            best_score: self.best,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

fn read_best(path: &Path) -> Result<u32> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let doc: BestScoreFile = serde_json::from_str(&text)
        .with_context(|| format!("invalid best score file {}", path.display()))?;
    Ok(doc.best_score)
}
