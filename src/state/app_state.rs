//! Main application state management

use std::{sync::Arc, time::Instant};
use tracing::{info, warn};

use crate::{
    countdown::{
        Clock, CountdownError, CountdownOptions, CountdownTimer, Scheduler, SystemClock,
    },
    display::{DisplaySnapshot, PageDisplay},
};
use super::TimerState;

/// Main application state shared by the HTTP handlers and background tasks
pub struct AppState {
    /// The countdown driving the page
    pub timer: CountdownTimer,
    /// Display the countdown writes into
    pub display: PageDisplay,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState ticking on `scheduler` with the system clock
    pub fn new(options: CountdownOptions, scheduler: Arc<dyn Scheduler>, port: u16, host: String) -> Self {
        Self::with_clock(options, scheduler, Arc::new(SystemClock), port, host)
    }

    /// Create a new AppState with an explicit clock
    pub fn with_clock(
        options: CountdownOptions,
        scheduler: Arc<dyn Scheduler>,
        clock: Arc<dyn Clock>,
        port: u16,
        host: String,
    ) -> Self {
        let display = PageDisplay::new();
        let timer = CountdownTimer::new(options, display.clone(), scheduler, clock);

        Self {
            timer,
            display,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Page is ready: start the countdown.
    ///
    /// A refused start is logged and otherwise ignored, the page is still served.
    pub fn on_ready(&self) -> Result<TimerState, CountdownError> {
        let result = self.timer.start();
        match &result {
            Ok(state) => info!("Countdown is {}", state),
            Err(e) => warn!("Serving page without a live countdown: {}", e),
        }
        result
    }

    /// Page is being torn down: cancel the countdown schedule
    pub fn on_teardown(&self) {
        self.timer.stop();
    }

    pub fn options(&self) -> &CountdownOptions {
        self.timer.options()
    }

    /// Current display contents
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.display.snapshot()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
