//! Persisted run statistics
//!
//! One JSON flat file, loaded at session start and written back on win,
//! loss, or quit to menu. A missing or corrupt file starts fresh rather
//! than blocking play.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DOLLAR_VALUE, SECOND_VALUE};

/// Lifetime statistics across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Dollars collected across all runs
    pub money_total: u32,
    /// Best winning run, stored as time left on the clock
    pub best_minutes: u32,
    pub best_seconds: u32,
    /// Cumulative score
    pub total_score: u32,
}

impl Stats {
    /// Fold a won run into the totals, with a bonus for the clock left
    pub fn record_win(&mut self, dollars: u32, seconds_remaining: u32) {
        self.total_score += seconds_remaining * SECOND_VALUE + dollars * DOLLAR_VALUE;
        self.money_total += dollars;

        let best = self.best_minutes * 60 + self.best_seconds;
        if seconds_remaining > best {
            self.best_minutes = seconds_remaining / 60;
            self.best_seconds = seconds_remaining % 60;
        }
    }

    /// Fold a lost (or abandoned) run into the totals; no time bonus
    pub fn record_loss(&mut self, dollars: u32) {
        self.total_score += dollars * DOLLAR_VALUE;
        self.money_total += dollars;
    }

    /// Load stats from the flat file, starting fresh if it is unusable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(stats) => {
                    log::info!("loaded stats from {}", path.display());
                    stats
                }
                Err(err) => {
                    log::warn!("corrupt stats file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no stats file at {}, starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Write stats back to the flat file
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
