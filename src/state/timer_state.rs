//! Lifecycle state of a countdown timer

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a countdown is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Created, `start()` not called yet
    Unstarted,
    /// Ticking once per second
    Running,
    /// The event has been reached and the ended message is shown
    Ended,
    /// Cancelled by the host before the event was reached
    Stopped,
    /// Start was refused; the timer never ticks
    Inert,
}

impl TimerState {
    /// Check if the timer is ticking
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Unstarted => "unstarted",
            TimerState::Running => "running",
            TimerState::Ended => "ended",
            TimerState::Stopped => "stopped",
            TimerState::Inert => "inert",
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Unstarted
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
