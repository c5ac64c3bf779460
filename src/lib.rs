//! Event Countdown - A small HTTP service that displays a live countdown
//! 
//! This library provides the countdown core (event date parsing, the
//! once-per-second tick loop and its termination) together with the page,
//! configuration and HTTP plumbing that host it.

pub mod config;
pub mod countdown;
pub mod display;
pub mod settings;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use countdown::{CountdownTimer, CountdownError, RenderTarget, Scheduler};
pub use state::{AppState, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
