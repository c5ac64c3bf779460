//! Countdown core
//!
//! Turns a configured event date into a once-per-second rendering of the
//! days, hours, minutes and seconds left, and stops by itself when the event
//! is reached. Time, scheduling and output are all injected.

pub mod clock;
pub mod error;
pub mod options;
pub mod remainder;
pub mod render;
pub mod scheduler;
pub mod target;
pub mod timer;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CountdownError;
pub use options::{CountdownOptions, Position, DEFAULT_TITLE};
pub use remainder::{Remainder, Unit};
pub use render::RenderTarget;
pub use scheduler::{ManualScheduler, ScheduleHandle, Scheduler, TickCallback, TokioScheduler};
pub use target::EventTarget;
pub use timer::{CountdownTimer, TICK_INTERVAL};
