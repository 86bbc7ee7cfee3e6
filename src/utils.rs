use chrono::{Datelike as _, NaiveDate};

use crate::consts;

/// Parses an `HH:MM` clock string into minutes since midnight
///
/// Anything after the minute part is ignored, so `HH:MM:SS` is accepted as well.
/// Returns `None` for empty input, a missing minute part, non-integer parts,
/// or a time that does not exist on a 24-hour clock.
pub fn parse_clock_minutes(clock: &str) -> Option<i64> {
    let (max_hours, max_minutes) = consts::MAX_CLOCK_TIME;
    let mut parts = clock.trim().split(':');

    let hours = parts.next()?.trim().parse::<i64>().ok()
        .filter(|h| (0..=max_hours).contains(h))?;
    let minutes = parts.next()?.trim().parse::<i64>().ok()
        .filter(|m| (0..=max_minutes).contains(m))?;

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Renders a minute count as `Xh Ym`
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);

    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn is_same_month(date: &NaiveDate, month: &NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}
