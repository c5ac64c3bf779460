//! The countdown timer: validation, tick loop and termination

use std::{
    sync::{Arc, Mutex, MutexGuard, Weak},
    time::Duration,
};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use super::{
    Clock, CountdownError, CountdownOptions, EventTarget, Remainder, RenderTarget, ScheduleHandle,
    Scheduler, Unit,
};
use crate::state::TimerState;

/// Interval between two renders
pub const TICK_INTERVAL: Duration = Duration::from_millis(1_000);

struct Inner {
    state: TimerState,
    target: Option<EventTarget>,
    handle: Option<ScheduleHandle>,
    remaining: Option<Remainder>,
    failure: Option<CountdownError>,
    display: Box<dyn RenderTarget>,
}

impl Inner {
    /// Recompute the remainder against `now` and render it.
    ///
    /// Does nothing unless running. On reaching the event the schedule is
    /// cancelled once and the display replaced.
    fn tick(&mut self, now: DateTime<Utc>, scheduler: Option<&dyn Scheduler>) -> TimerState {
        if !self.state.is_running() {
            return self.state;
        }
        let Some(target) = self.target else {
            return self.state;
        };

        match Remainder::from_millis(target.millis_until(now)) {
            Some(remaining) => {
                for unit in Unit::ALL {
                    self.display.set_unit(unit, &remaining.render(unit));
                }
                self.remaining = Some(remaining);
            }
            None => {
                if let (Some(handle), Some(scheduler)) = (self.handle.take(), scheduler) {
                    scheduler.cancel(handle);
                }
                self.display.replace_with_ended_message();
                self.remaining = None;
                self.state = TimerState::Ended;
                info!("Countdown reached {}, event has started", target.instant());
            }
        }

        self.state
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // Rendering is idempotent, so a panic in a render target leaves nothing to repair
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A live countdown towards one event, writing into one render target
pub struct CountdownTimer {
    options: CountdownOptions,
    scheduler: Arc<dyn Scheduler>,
    clock: Arc<dyn Clock>,
    inner: Arc<Mutex<Inner>>,
}

impl CountdownTimer {
    /// Create an unstarted timer. Nothing is rendered until [`start`](Self::start).
    pub fn new(
        options: CountdownOptions,
        display: impl RenderTarget + 'static,
        scheduler: Arc<dyn Scheduler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            options,
            scheduler,
            clock,
            inner: Arc::new(Mutex::new(Inner {
                state: TimerState::Unstarted,
                target: None,
                handle: None,
                remaining: None,
                failure: None,
                display: Box::new(display),
            })),
        }
    }

    /// Validate the event date, render once and start ticking every second.
    ///
    /// Failures are logged and leave the timer inert without touching the
    /// render target. Starting an ended timer is a no-op.
    pub fn start(&self) -> Result<TimerState, CountdownError> {
        let mut inner = lock(&self.inner);

        match inner.state {
            TimerState::Running => return Err(CountdownError::AlreadyRunning),
            TimerState::Ended => return Ok(TimerState::Ended),
            TimerState::Inert => {
                return Err(inner.failure.clone().unwrap_or(CountdownError::ConfigMissing));
            }
            TimerState::Unstarted | TimerState::Stopped => {}
        }

        let target = match self.validate(&*inner) {
            Ok(target) => target,
            Err(e) => {
                error!("Countdown not started: {}", e);
                inner.state = TimerState::Inert;
                inner.failure = Some(e.clone());
                return Err(e);
            }
        };

        info!(
            "Starting countdown \"{}\" to {} ({})",
            self.options.title,
            target.instant(),
            self.options.timezone
        );
        inner.target = Some(target);
        inner.state = TimerState::Running;

        // Immediate render so the slots never show stale values for a second
        if inner.tick(self.clock.now(), None) == TimerState::Ended {
            return Ok(TimerState::Ended);
        }

        let callback_inner = Arc::clone(&self.inner);
        let callback_clock = Arc::clone(&self.clock);
        let callback_scheduler: Weak<dyn Scheduler> = Arc::downgrade(&self.scheduler);
        let handle = self.scheduler.schedule(
            TICK_INTERVAL,
            Box::new(move || {
                let scheduler = callback_scheduler.upgrade();
                lock(&callback_inner).tick(callback_clock.now(), scheduler.as_deref());
            }),
        );
        debug!("Countdown ticking on schedule {}", handle.id());
        inner.handle = Some(handle);

        Ok(TimerState::Running)
    }

    /// Run one recomputation now, as a scheduled tick would
    pub fn tick(&self) -> TimerState {
        lock(&self.inner).tick(self.clock.now(), Some(&*self.scheduler))
    }

    /// Cancel the schedule if there is one. Safe to call any number of times.
    pub fn stop(&self) {
        let mut inner = lock(&self.inner);

        if let Some(handle) = inner.handle.take() {
            self.scheduler.cancel(handle);
            info!("Countdown \"{}\" stopped", self.options.title);
        }
        if inner.state.is_running() {
            inner.state = TimerState::Stopped;
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> TimerState {
        lock(&self.inner).state
    }

    /// Remainder written by the most recent render, if still counting
    pub fn remaining(&self) -> Option<Remainder> {
        lock(&self.inner).remaining
    }

    /// Resolved event instant, once started
    pub fn target(&self) -> Option<EventTarget> {
        lock(&self.inner).target
    }

    /// Why the timer refused to start, if it did
    pub fn failure(&self) -> Option<CountdownError> {
        lock(&self.inner).failure.clone()
    }

    pub fn options(&self) -> &CountdownOptions {
        &self.options
    }

    fn validate(&self, inner: &Inner) -> Result<EventTarget, CountdownError> {
        let input = self
            .options
            .event_instant
            .as_deref()
            .ok_or(CountdownError::ConfigMissing)?;
        let target = EventTarget::parse(input, self.options.timezone)?;

        if !inner.display.is_mounted() {
            return Err(CountdownError::RenderTargetMissing);
        }
        Ok(target)
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
