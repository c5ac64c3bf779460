// Property-based tests for the remainder arithmetic and the tick loop
// Random durations and random clock steps instead of hand-picked values

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use event_countdown::countdown::{
    CountdownOptions, CountdownTimer, ManualClock, ManualScheduler, Remainder, Unit,
};
use event_countdown::display::PageDisplay;
use event_countdown::state::TimerState;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

fn counting(millis: i64) -> (CountdownTimer, PageDisplay, Arc<ManualScheduler>, Arc<ManualClock>) {
    let display = PageDisplay::new();
    let scheduler = Arc::new(ManualScheduler::new());
    let clock = Arc::new(ManualClock::new(base()));
    let target = base() + Duration::milliseconds(millis);
    let timer = CountdownTimer::new(
        CountdownOptions::new(target.to_rfc3339()),
        display.clone(),
        scheduler.clone(),
        clock.clone(),
    );
    (timer, display, scheduler, clock)
}

fn rendered_seconds(display: &PageDisplay) -> i64 {
    let snapshot = display.snapshot();
    let value = |unit: Unit| snapshot.slot(unit).parse::<i64>().unwrap();
    ((value(Unit::Days) * 24 + value(Unit::Hours)) * 60 + value(Unit::Minutes)) * 60
        + value(Unit::Seconds)
}

proptest! {
    /// Property: every unit below days stays inside its range
    #[test]
    fn prop_units_stay_in_range(millis in 1i64..i64::MAX / 2) {
        let remainder = Remainder::from_millis(millis).unwrap();

        prop_assert!(remainder.days >= 0);
        prop_assert!((0..24).contains(&remainder.hours));
        prop_assert!((0..60).contains(&remainder.minutes));
        prop_assert!((0..60).contains(&remainder.seconds));
    }

    /// Property: the units add back up to the floor of the whole seconds
    #[test]
    fn prop_total_seconds_is_floor(millis in 1i64..i64::MAX / 2) {
        let remainder = Remainder::from_millis(millis).unwrap();
        prop_assert_eq!(remainder.total_seconds(), millis / 1_000);
    }

    /// Property: nothing is left once the duration is zero or negative
    #[test]
    fn prop_non_positive_is_reached(millis in i64::MIN / 2..=0i64) {
        prop_assert!(Remainder::from_millis(millis).is_none());
    }

    /// Property: hours, minutes and seconds are always two digits, days never padded
    #[test]
    fn prop_padding_rule(millis in 1i64..i64::MAX / 2) {
        let remainder = Remainder::from_millis(millis).unwrap();

        for unit in [Unit::Hours, Unit::Minutes, Unit::Seconds] {
            let text = remainder.render(unit);
            prop_assert_eq!(text.len(), 2);
            prop_assert_eq!(text.parse::<i64>().unwrap(), remainder.value(unit));
        }

        let days = remainder.render(Unit::Days);
        prop_assert_eq!(days.clone(), remainder.days.to_string());
        prop_assert!(days == "0" || !days.starts_with('0'));
    }

    /// Property: the first render right after start shows the floor of the seconds left
    #[test]
    fn prop_start_renders_floor(millis in 1i64..200_000_000_000_000i64) {
        let (timer, display, _, _) = counting(millis);

        prop_assert_eq!(timer.start(), Ok(TimerState::Running));
        prop_assert_eq!(rendered_seconds(&display), millis / 1_000);
    }

    /// Property: over any sequence of clock steps the remainder never grows,
    /// and once ended the timer stays ended with its schedule cancelled once
    #[test]
    fn prop_ticks_never_count_up(
        millis in 1i64..300_000i64,
        steps in prop::collection::vec(0i64..5_000, 1..50),
    ) {
        let (timer, display, scheduler, clock) = counting(millis);
        timer.start().unwrap();

        let mut previous = timer.remaining().map_or(0, |r| r.total_seconds());
        let mut elapsed = 0i64;
        let mut ended = false;

        for step in steps {
            elapsed += step;
            clock.set(base() + Duration::milliseconds(elapsed));
            scheduler.fire_all();

            let current = timer.remaining().map_or(0, |r| r.total_seconds());
            prop_assert!(current <= previous, "{} grew to {}", previous, current);

            if ended {
                prop_assert_eq!(timer.state(), TimerState::Ended);
            }
            ended = timer.state() == TimerState::Ended;

            if ended {
                prop_assert!(elapsed >= millis);
                prop_assert!(display.snapshot().ended);
                prop_assert_eq!(scheduler.cancelled().len(), 1);
                prop_assert_eq!(scheduler.active(), 0);
            } else {
                prop_assert_eq!(current, (millis - elapsed) / 1_000);
                prop_assert_eq!(rendered_seconds(&display), current);
            }
            previous = current;
        }
    }
}
