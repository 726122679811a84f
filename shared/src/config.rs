//! Session configuration, fixed when the session starts.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ROWS: i32 = 20;
pub const DEFAULT_COLS: i32 = 30;
pub const DEFAULT_TICK_MS: u64 = 500;
pub const DEFAULT_APPLE_RATE: u32 = 10;
pub const DEFAULT_RESUME_GRACE_PERIOD: u32 = 3;

/// Narrowest grid that still fits a spawned chain facing right.
pub const MIN_COLS: i32 = 4;
pub const MIN_ROWS: i32 = 3;

/// Grid size and pacing for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    /// Movement tick interval in milliseconds.
    pub tick_ms: u64,
    /// Spawn ticks between apples.
    pub apple_rate: u32,
    /// Seconds between a resume request and play continuing.
    pub resume_grace_period: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: DEFAULT_TICK_MS,
            apple_rate: DEFAULT_APPLE_RATE,
            resume_grace_period: DEFAULT_RESUME_GRACE_PERIOD,
        }
    }
}

impl GameConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Checks that a spawned chain fits on the grid and that ticks advance
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < MIN_COLS || self.rows < MIN_ROWS {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Errors raised when validating a session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "grid {cols}x{rows} is too small, need at least {} columns and {} rows",
        MIN_COLS,
        MIN_ROWS
    )]
    GridTooSmall { rows: i32, cols: i32 },
    #[error("tick interval must be greater than zero")]
    ZeroTick,
}
