//! Viewer configuration.
//!
//! Read once at startup from environment variables:
//!
//! - `ECOSIM_SIZE_X` / `ECOSIM_SIZE_Y`: world size in cells (default 100x100)
//! - `ECOSIM_TICK_MS`: playback tick interval (default 200, minimum 1)
//! - `ECOSIM_SEED`: demo world seed (default 1)
//! - `ECOSIM_START_PAUSED`: `1`/`true` to start paused
//! - `ECOSIM_LOG_PATH`: write logs to this file (unset or empty disables logging)
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::engine::WorldConfig;
use crate::types::{TICK_MS, WORLD_SIZE_X, WORLD_SIZE_Y};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub size_x: u16,
    pub size_y: u16,
    pub tick_ms: u32,
    pub seed: u32,
    pub start_paused: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            size_x: WORLD_SIZE_X,
            size_y: WORLD_SIZE_Y,
            tick_ms: TICK_MS,
            seed: 1,
            start_paused: false,
            log_path: None,
        }
    }
}

impl ViewerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size_x = parsed::<u16, _>(&lookup, "ECOSIM_SIZE_X")
            .filter(|&n| n > 0)
            .unwrap_or(defaults.size_x);
        let size_y = parsed::<u16, _>(&lookup, "ECOSIM_SIZE_Y")
            .filter(|&n| n > 0)
            .unwrap_or(defaults.size_y);
        let tick_ms = parsed::<u32, _>(&lookup, "ECOSIM_TICK_MS")
            .unwrap_or(defaults.tick_ms)
            .max(1);
        let seed = parsed(&lookup, "ECOSIM_SEED").unwrap_or(defaults.seed);

        let start_paused = lookup("ECOSIM_START_PAUSED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("ECOSIM_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            size_x,
            size_y,
            tick_ms,
            seed,
            start_paused,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    pub fn world(&self) -> WorldConfig {
        WorldConfig {
            size_x: self.size_x,
            size_y: self.size_y,
            seed: self.seed,
            ..WorldConfig::default()
        }
    }
}

fn parsed<T: FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
