//! Session high score
//!
//! In-memory only: the best score survives restarts but not the process.
//! Also keeps a short history of completed runs, newest first.

use serde::{Deserialize, Serialize};

use crate::consts::RUN_HISTORY;

/// One completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Final score
    pub score: u32,
    /// Running frames the run lasted
    pub frames: u64,
}

/// Session best and recent runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    best: u32,
    runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score this session (0 before any run ends)
    #[inline]
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Recent completed runs, newest first
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record_run(&mut self, score: u32, frames: u64) -> bool {
        self.runs.insert(0, RunRecord { score, frames });
        self.runs.truncate(RUN_HISTORY);

        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Rank `score` would take among the remembered runs (1-indexed)
    pub fn rank_of(&self, score: u32) -> usize {
        self.runs.iter().filter(|r| r.score > score).count() + 1
    }
}
