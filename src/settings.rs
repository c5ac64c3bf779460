//! Sanitization of the configured countdown settings

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::{
    config::Config,
    countdown::{CountdownOptions, Position, DEFAULT_TITLE},
};

/// Symlink into the tz database naming the system zone
const LOCALTIME_PATH: &str = "/etc/localtime";
/// Debian-style plain-text zone name
const TIMEZONE_PATH: &str = "/etc/timezone";

/// Names that mean plain UTC and so say nothing about the local zone
const UTC_ALIASES: [&str; 8] = [
    "UTC", "Etc/UTC", "UCT", "Etc/UCT", "Universal", "Etc/Universal", "Zulu", "Etc/Zulu",
];

/// Build countdown options from the raw configuration.
///
/// Unknown timezones fall back to UTC and unknown positions to top-right,
/// a blank title becomes "Event" and a blank event date counts as unset.
pub fn sanitize(config: &Config) -> CountdownOptions {
    CountdownOptions {
        event_instant: sanitize_event_date(config.event_date.as_deref()),
        timezone: match config.timezone.as_deref() {
            Some(timezone) => sanitize_timezone(timezone),
            None => default_timezone(),
        },
        title: sanitize_title(config.title.as_deref()),
        position: sanitize_position(config.position.as_deref()),
    }
}

pub fn sanitize_event_date(event_date: Option<&str>) -> Option<String> {
    event_date
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(str::to_string)
}

pub fn sanitize_title(title: Option<&str>) -> String {
    title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

pub fn sanitize_timezone(timezone: &str) -> Tz {
    timezone.trim().parse().unwrap_or_else(|_| {
        warn!("Unknown timezone {:?}, using UTC", timezone);
        Tz::UTC
    })
}

pub fn sanitize_position(position: Option<&str>) -> Position {
    match position.map(str::trim) {
        None | Some("") => Position::default(),
        Some(position) => position.parse().unwrap_or_else(|e| {
            warn!("{}, using {}", e, Position::default());
            Position::default()
        }),
    }
}

/// Timezone used when none is configured.
///
/// Tried in order: the `TZ` environment variable, the zone `/etc/localtime`
/// links to, then `/etc/timezone`. UTC when none of them names a zone.
pub fn default_timezone() -> Tz {
    if let Some(tz) = detect_timezone(std::env::var("TZ").ok().as_deref()) {
        debug!("Detected timezone {} from TZ", tz);
        return tz;
    }

    let linked = std::fs::read_link(LOCALTIME_PATH).ok();
    if let Some(tz) = linked
        .as_deref()
        .and_then(|path| path.to_str())
        .and_then(zone_from_zoneinfo_path)
    {
        debug!("Detected timezone {} from {}", tz, LOCALTIME_PATH);
        return tz;
    }

    let named = std::fs::read_to_string(TIMEZONE_PATH).ok();
    if let Some(tz) = detect_timezone(named.as_deref()) {
        debug!("Detected timezone {} from {}", tz, TIMEZONE_PATH);
        return tz;
    }

    Tz::UTC
}

/// Read a zone name such as a `TZ` value. UTC and unknown names give `None`.
pub fn detect_timezone(value: Option<&str>) -> Option<Tz> {
    value
        .map(|value| value.trim().trim_start_matches(':'))
        .and_then(|value| value.parse::<Tz>().ok())
        .filter(|tz| !UTC_ALIASES.contains(&tz.name()))
}

/// Zone named by a tz database path like `/usr/share/zoneinfo/Europe/Paris`
pub fn zone_from_zoneinfo_path(path: &str) -> Option<Tz> {
    let (_, name) = path.rsplit_once("zoneinfo/")?;
    detect_timezone(Some(name))
}
