//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod display_watch;

// Re-export main functions
pub use display_watch::display_watch_task;
