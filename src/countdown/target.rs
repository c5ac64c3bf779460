//! Parsing of the configured event date into an absolute instant

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::CountdownError;

/// Formats accepted for a date-time without an offset
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The instant a countdown counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventTarget(DateTime<Utc>);

impl EventTarget {
    /// Wrap an already resolved instant
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse a configured event date.
    ///
    /// Strings carrying an offset (RFC 3339) are taken as is. Anything else is
    /// read as a wall-clock time in `timezone`; a bare date means midnight.
    pub fn parse(input: &str, timezone: Tz) -> Result<Self, CountdownError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CountdownError::ConfigMissing);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(instant.with_timezone(&Utc)));
        }

        let naive = parse_naive(input)
            .ok_or_else(|| CountdownError::invalid(input, "unrecognised date format"))?;

        // Ambiguous wall-clock times (DST fall back) take the earlier instant
        if let Some(local) = timezone.from_local_datetime(&naive).earliest() {
            return Ok(Self(local.with_timezone(&Utc)));
        }

        // Skipped wall-clock time (DST spring forward): read it with the offset
        // in force before the gap, which lands the same distance past the jump
        let before_gap = timezone
            .offset_from_utc_datetime(&(naive - Duration::days(1)))
            .fix();
        let utc = naive - Duration::seconds(i64::from(before_gap.local_minus_utc()));
        Ok(Self(Utc.from_utc_datetime(&utc)))
    }

    /// The target as a UTC instant
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Milliseconds left between `now` and the target, negative once passed
    pub fn millis_until(&self, now: DateTime<Utc>) -> i64 {
        (self.0 - now).num_milliseconds()
    }
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
