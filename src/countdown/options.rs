//! Inputs a countdown is built from

use std::{fmt, str::FromStr};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Title shown when none is configured
pub const DEFAULT_TITLE: &str = "Event";

/// Screen placement of the countdown box.
///
/// Only consumed by styling; the countdown itself never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleMiddle,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleMiddle,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopMiddle => "top-middle",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::MiddleMiddle => "middle-middle",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomMiddle => "bottom-middle",
            Position::BottomRight => "bottom-right",
        }
    }

    /// CSS class applied to the countdown container
    pub fn css_class(&self) -> String {
        format!("event-countdown-{}", self.as_str())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::TopRight
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown position: {}", s))
    }
}

/// Everything a countdown needs from its host
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownOptions {
    /// Configured event date; `None` suppresses the countdown
    pub event_instant: Option<String>,
    /// Zone used for event dates that carry no offset
    pub timezone: Tz,
    pub title: String,
    pub position: Position,
}

impl CountdownOptions {
    pub fn new(event_instant: impl Into<String>) -> Self {
        Self {
            event_instant: Some(event_instant.into()),
            ..Self::default()
        }
    }
}

impl Default for CountdownOptions {
    fn default() -> Self {
        Self {
            event_instant: None,
            timezone: Tz::UTC,
            title: DEFAULT_TITLE.to_string(),
            position: Position::default(),
        }
    }
}
