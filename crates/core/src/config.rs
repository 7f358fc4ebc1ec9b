//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI2048_ROWS` | 4 | Grid height |
//! | `TUI2048_COLS` | 4 | Grid width |
//! | `TUI2048_SEED` | clock | Tile spawner seed |
//! | `TUI2048_LOG_PATH` | unset | Append log records to this file |
//!
//! Unparsable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rows = lookup("TUI2048_ROWS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_ROWS);
        let cols = lookup("TUI2048_COLS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_COLS);
        let seed = lookup("TUI2048_SEED").and_then(|s| s.trim().parse().ok());
        let log_path = lookup("TUI2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            rows,
            cols,
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
