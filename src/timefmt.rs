//! Relative-age formatting for message and presence timestamps.
//!
//! DESIGN
//! ======
//! Ages under a minute read "just now", then minute/hour/day buckets with a
//! plural suffix, and anything a week or older falls back to a calendar
//! date. All divisions floor. The caller supplies `now` so rendering never
//! races the clock and tests stay deterministic.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year]");

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 3_600;
const DAY_SECS: i64 = 86_400;
const WEEK_SECS: i64 = 604_800;

/// Render the age of `timestamp_ms` relative to `now_ms`.
///
/// Future timestamps clamp to zero elapsed time and read "just now".
#[must_use]
pub fn time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = now_ms.saturating_sub(timestamp_ms).max(0) / 1_000;

    if seconds < MINUTE_SECS {
        return "just now".into();
    }
    if seconds < HOUR_SECS {
        return plural(seconds / MINUTE_SECS, "minute");
    }
    if seconds < DAY_SECS {
        return plural(seconds / HOUR_SECS, "hour");
    }
    if seconds < WEEK_SECS {
        return plural(seconds / DAY_SECS, "day");
    }
    calendar_date(timestamp_ms)
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{n} {unit}s ago")
    } else {
        format!("{n} {unit} ago")
    }
}

/// Calendar fallback for week-old timestamps, e.g. "Aug 16, 2026" (UTC).
fn calendar_date(timestamp_ms: i64) -> String {
    let Ok(date) = OffsetDateTime::from_unix_timestamp(timestamp_ms.div_euclid(1_000)) else {
        return "long ago".into();
    };
    date.format(&DATE_FORMAT)
        .unwrap_or_else(|_| date.date().to_string())
}

#[cfg(test)]
#[path = "timefmt_test.rs"]
mod tests;
