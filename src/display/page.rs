//! Shared page display the countdown writes into

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use crate::countdown::{RenderTarget, Unit};

/// Contents of the countdown container as currently shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Set once the container has been replaced by the ended message
    pub ended: bool,
}

impl DisplaySnapshot {
    /// Slots as they appear before the first render
    pub fn new() -> Self {
        Self {
            days: "0".to_string(),
            hours: "0".to_string(),
            minutes: "0".to_string(),
            seconds: "0".to_string(),
            ended: false,
        }
    }

    pub fn slot(&self, unit: Unit) -> &str {
        match unit {
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
        }
    }

    fn slot_mut(&mut self, unit: Unit) -> &mut String {
        match unit {
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        }
    }
}

impl Default for DisplaySnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Render target backed by a watch channel.
///
/// Clones share the same display; HTTP handlers read it and background tasks
/// subscribe to its changes.
#[derive(Debug, Clone)]
pub struct PageDisplay {
    updates: Arc<watch::Sender<DisplaySnapshot>>,
    mounted: bool,
}

impl PageDisplay {
    /// Create a display whose countdown container exists on the page
    pub fn new() -> Self {
        let (updates, _) = watch::channel(DisplaySnapshot::new());
        Self {
            updates: Arc::new(updates),
            mounted: true,
        }
    }

    /// Create a display without a countdown container
    pub fn detached() -> Self {
        Self {
            mounted: false,
            ..Self::new()
        }
    }

    /// Current contents of the display
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.updates.borrow().clone()
    }

    /// Receive every change made to the display
    pub fn subscribe(&self) -> watch::Receiver<DisplaySnapshot> {
        self.updates.subscribe()
    }
}

impl Default for PageDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for PageDisplay {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn set_unit(&mut self, unit: Unit, value: &str) {
        self.updates.send_if_modified(|snapshot| {
            if snapshot.ended {
                warn!("Ignoring {} update after the countdown ended", unit);
                return false;
            }
            let slot = snapshot.slot_mut(unit);
            if slot.as_str() == value {
                return false;
            }
            *slot = value.to_string();
            true
        });
    }

    fn replace_with_ended_message(&mut self) {
        self.updates.send_if_modified(|snapshot| {
            let changed = !snapshot.ended;
            snapshot.ended = true;
            changed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_zeroed_slots() {
        let display = PageDisplay::new();
        let snapshot = display.snapshot();
        for unit in Unit::ALL {
            assert_eq!(snapshot.slot(unit), "0");
        }
        assert!(!snapshot.ended);
        assert!(display.is_mounted());
        assert!(!PageDisplay::detached().is_mounted());
    }

    #[test]
    fn clones_share_contents() {
        let display = PageDisplay::new();
        let mut writer = display.clone();
        writer.set_unit(Unit::Hours, "07");
        assert_eq!(display.snapshot().hours, "07");
    }

    #[tokio::test]
    async fn subscribers_see_changes_once() {
        let mut display = PageDisplay::new();
        let mut rx = display.subscribe();

        display.set_unit(Unit::Seconds, "42");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().seconds, "42");

        // Same value again is not a change
        display.set_unit(Unit::Seconds, "42");
        assert!(!rx.has_changed().unwrap());

        display.replace_with_ended_message();
        assert!(rx.borrow_and_update().ended);
        display.replace_with_ended_message();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn slots_frozen_after_end() {
        let mut display = PageDisplay::new();
        display.set_unit(Unit::Minutes, "05");
        display.replace_with_ended_message();
        display.set_unit(Unit::Minutes, "04");
        assert_eq!(display.snapshot().minutes, "05");
    }
}
