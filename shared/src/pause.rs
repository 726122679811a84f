//! Pause/resume with a countdown before play continues.

use serde::{Deserialize, Serialize};

/// Where the session is in the pause cycle.
///
/// `Running` → `Paused` → `Resuming { remaining }` → `Running`. Movement
/// only happens while `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
    Resuming { remaining: u32 },
}

/// A transition every connection should hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseEvent {
    Paused,
    Resumed,
}

impl PauseState {
    pub fn is_paused(self) -> bool {
        !matches!(self, PauseState::Running)
    }

    /// Seconds left before play resumes, 0 when not counting down.
    pub fn countdown(self) -> u32 {
        match self {
            PauseState::Resuming { remaining } => remaining,
            _ => 0,
        }
    }

    pub fn is_resuming(self) -> bool {
        matches!(self, PauseState::Resuming { .. })
    }

    /// Handles a pause request. A request mid-countdown changes nothing.
    pub fn toggle(self, grace_period: u32) -> (Self, Option<PauseEvent>) {
        match self {
            PauseState::Running => (PauseState::Paused, Some(PauseEvent::Paused)),
            PauseState::Paused if grace_period == 0 => {
                (PauseState::Running, Some(PauseEvent::Resumed))
            }
            PauseState::Paused => (
                PauseState::Resuming {
                    remaining: grace_period,
                },
                None,
            ),
            resuming @ PauseState::Resuming { .. } => (resuming, None),
        }
    }

    /// One second of countdown. Only meaningful while resuming.
    pub fn tick_countdown(self) -> (Self, Option<PauseEvent>) {
        match self {
            PauseState::Resuming { remaining } if remaining <= 1 => {
                (PauseState::Running, Some(PauseEvent::Resumed))
            }
            PauseState::Resuming { remaining } => (
                PauseState::Resuming {
                    remaining: remaining - 1,
                },
                None,
            ),
            other => (other, None),
        }
    }
}
