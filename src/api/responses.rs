//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    countdown::Position,
    display::DisplaySnapshot,
    state::TimerState,
};

/// Countdown status returned by GET /countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub title: String,
    pub position: Position,
    pub state: TimerState,
    pub display: DisplaySnapshot,
    pub event_instant: Option<DateTime<Utc>>,
    pub error: Option<String>,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
