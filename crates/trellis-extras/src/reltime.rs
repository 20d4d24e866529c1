//! Relative wall-clock wording.
//!
//! Formats the distance between two instants the way a UI timestamp
//! reads: "3 minutes ago", "in 2 days", "just now". The reference `now`
//! is always passed explicitly, so output is deterministic under test.
//! Unit thresholds follow the common UI convention: a month is 30 days,
//! a year is 365.

use std::time::SystemTime;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Unit ladder, largest first. Each entry is (singular name, seconds).
const UNITS: [(&str, i64); 7] = [
    ("year", 365 * SECONDS_PER_DAY),
    ("month", 30 * SECONDS_PER_DAY),
    ("week", 7 * SECONDS_PER_DAY),
    ("day", SECONDS_PER_DAY),
    ("hour", SECONDS_PER_HOUR),
    ("minute", SECONDS_PER_MINUTE),
    ("second", 1),
];

fn phrase(count: i64, unit: &str, past: bool) -> String {
    let plural = if count == 1 { "" } else { "s" };
    if past {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

fn format_ladder(diff_secs: i64, units: &[(&str, i64)], fallback: &str) -> String {
    let past = diff_secs >= 0;
    let magnitude = diff_secs.unsigned_abs() as i64;
    for (unit, secs) in units {
        let count = magnitude / secs;
        if count >= 1 {
            return phrase(count, unit, past);
        }
    }
    fallback.to_owned()
}

/// Relative wording for a signed distance in seconds (positive = past).
#[must_use]
pub fn relative_secs(diff_secs: i64) -> String {
    format_ladder(diff_secs, &UNITS, "just now")
}

/// Day-granularity wording for a signed distance in seconds.
///
/// Anything closer than a day reads as "today".
#[must_use]
pub fn relative_date_secs(diff_secs: i64) -> String {
    format_ladder(diff_secs, &UNITS[..4], "today")
}

fn diff_secs(then: SystemTime, now: SystemTime) -> i64 {
    match now.duration_since(then) {
        Ok(d) => d.as_secs().min(i64::MAX as u64) as i64,
        Err(e) => -(e.duration().as_secs().min(i64::MAX as u64) as i64),
    }
}

/// Relative wording for `then` as seen from `now`.
#[must_use]
pub fn relative(then: SystemTime, now: SystemTime) -> String {
    relative_secs(diff_secs(then, now))
}

/// Day-granularity wording for `then` as seen from `now`.
#[must_use]
pub fn relative_date(then: SystemTime, now: SystemTime) -> String {
    relative_date_secs(diff_secs(then, now))
}

/// RFC 3339 rendering of a timestamp (UTC).
///
/// Formatting only fails outside the representable year range; that case
/// renders as an empty string rather than propagating an error nobody
/// can act on.
#[must_use]
pub fn rfc3339(then: SystemTime) -> String {
    OffsetDateTime::from(then)
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn sub_second_is_just_now() {
        assert_eq!(relative_secs(0), "just now");
        // The reverse direction is symmetric at the boundary.
        assert_eq!(relative_secs(-0), "just now");
    }

    #[test]
    fn seconds_and_minutes() {
        assert_eq!(relative_secs(1), "1 second ago");
        assert_eq!(relative_secs(45), "45 seconds ago");
        assert_eq!(relative_secs(60), "1 minute ago");
        assert_eq!(relative_secs(3 * 60 + 20), "3 minutes ago");
    }

    #[test]
    fn hours_days_weeks() {
        assert_eq!(relative_secs(SECONDS_PER_HOUR), "1 hour ago");
        assert_eq!(relative_secs(5 * SECONDS_PER_HOUR), "5 hours ago");
        assert_eq!(relative_secs(SECONDS_PER_DAY), "1 day ago");
        assert_eq!(relative_secs(13 * SECONDS_PER_DAY), "1 week ago");
    }

    #[test]
    fn months_and_years() {
        assert_eq!(relative_secs(31 * SECONDS_PER_DAY), "1 month ago");
        assert_eq!(relative_secs(365 * SECONDS_PER_DAY), "1 year ago");
        assert_eq!(relative_secs(2 * 365 * SECONDS_PER_DAY), "2 years ago");
    }

    #[test]
    fn future_times_read_forward() {
        assert_eq!(relative_secs(-30), "in 30 seconds");
        assert_eq!(relative_secs(-2 * SECONDS_PER_HOUR), "in 2 hours");
        assert_eq!(relative_secs(-8 * SECONDS_PER_DAY), "in 1 week");
    }

    #[test]
    fn date_only_collapses_to_today() {
        assert_eq!(relative_date_secs(0), "today");
        assert_eq!(relative_date_secs(5 * SECONDS_PER_HOUR), "today");
        assert_eq!(relative_date_secs(SECONDS_PER_DAY), "1 day ago");
        assert_eq!(relative_date_secs(-3 * SECONDS_PER_DAY), "in 3 days");
    }

    #[test]
    fn system_time_pair() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let then = now - Duration::from_secs(90);
        assert_eq!(relative(then, now), "1 minute ago");
        assert_eq!(relative(now + Duration::from_secs(120), now), "in 2 minutes");
        assert_eq!(relative_date(then, now), "today");
    }

    #[test]
    fn rfc3339_known_epoch() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_722_446_520);
        assert_eq!(rfc3339(t), "2024-07-31T17:22:00Z");
    }
}
