// End-to-end countdown on the tokio scheduler with paused time
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use event_countdown::{
    countdown::{Clock, CountdownOptions, CountdownTimer, TokioScheduler},
    display::PageDisplay,
    state::TimerState,
};
use tokio::{runtime::Handle, time::Instant};

/// Wall clock that follows tokio's (pausable) time
struct TokioClock {
    base: DateTime<Utc>,
    started: Instant,
}

impl TokioClock {
    fn new(base: DateTime<Utc>) -> Self {
        Self { base, started: Instant::now() }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = Duration::from_std(self.started.elapsed()).unwrap();
        self.base + elapsed
    }
}

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 18, 0, 0).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_counts_down_and_ends() {
    let scheduler = Arc::new(TokioScheduler::new(Handle::current()));
    let display = PageDisplay::new();
    let timer = CountdownTimer::new(
        CountdownOptions::new((base() + Duration::seconds(3)).to_rfc3339()),
        display.clone(),
        scheduler.clone(),
        Arc::new(TokioClock::new(base())),
    );

    assert_eq!(timer.start(), Ok(TimerState::Running));
    assert_eq!(display.snapshot().seconds, "03");
    assert_eq!(scheduler.active(), 1);

    tokio::time::sleep(std::time::Duration::from_millis(1_500)).await;
    assert_eq!(display.snapshot().seconds, "02");

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    assert_eq!(timer.state(), TimerState::Ended);
    assert!(display.snapshot().ended);
    assert_eq!(scheduler.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_ticks() {
    let scheduler = Arc::new(TokioScheduler::new(Handle::current()));
    let display = PageDisplay::new();
    let timer = CountdownTimer::new(
        CountdownOptions::new((base() + Duration::minutes(10)).to_rfc3339()),
        display.clone(),
        scheduler.clone(),
        Arc::new(TokioClock::new(base())),
    );

    timer.start().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2_500)).await;
    assert_eq!(display.snapshot().seconds, "58");

    timer.stop();
    assert_eq!(scheduler.active(), 0);

    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    assert_eq!(display.snapshot().seconds, "58");
    assert_eq!(timer.state(), TimerState::Stopped);
}
