//! Leaderboard storage: one JSON record per line, appended per finished game.
//!
//! The game only ever appends fire-and-forget; reading back is for the
//! leaderboard screen and tolerates missing files and corrupt lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.jsonl";

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u32,
    pub level_reached: usize,
    pub lives_left: u32,
    pub matches_found: u32,
    pub time_used_secs: u32,
    pub date: NaiveDate,
}

pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry.
    pub fn append(&self, entry: &LeaderboardEntry) -> Result<()> {
        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open leaderboard file {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Append one entry, fire-and-forget: a failed write is logged and
    /// swallowed so it can never block gameplay.
    pub fn record(&self, entry: &LeaderboardEntry) {
        if let Err(e) = self.append(entry) {
            warn!("leaderboard write failed: {e:#}");
        }
    }

    /// Read all entries, best score first. Missing file means an empty
    /// board; unreadable lines are skipped.
    pub fn load_sorted(&self) -> Vec<LeaderboardEntry> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        let mut entries: Vec<LeaderboardEntry> = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("skipping corrupt leaderboard line: {e}");
                    None
                }
            })
            .collect();

        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Clear the stored leaderboard.
    pub fn reset(&self) -> Result<()> {
        std::fs::write(&self.path, "")
            .with_context(|| format!("reset leaderboard file {}", self.path.display()))
    }
}
