use chrono::{Duration, NaiveDateTime};

/// Upstream availability queries are one call per day, so ranges are capped
/// to bound call volume and API quota usage.
pub const MAX_QUERY_DAYS: usize = 60;

/// Expands a wall-clock range into per-day stamps in the upstream
/// `dd-MMM-yyyy 00:00:00` format. Both endpoints are floored to their day
/// boundary and included; ranges longer than [`MAX_QUERY_DAYS`] are
/// truncated to the first 60 days.
pub fn make_date_list(start: NaiveDateTime, end: NaiveDateTime) -> Vec<String> {
    let end_day = end.date();
    let mut current = start.date();
    let mut stamps = Vec::new();

    while current <= end_day && stamps.len() < MAX_QUERY_DAYS {
        stamps.push(format!("{} 00:00:00", current.format("%d-%b-%Y")));
        current += Duration::days(1);
    }

    stamps
}

/// Date portion of a stamp produced by [`make_date_list`].
pub fn day_of(stamp: &str) -> &str {
    stamp.split(' ').next().unwrap_or(stamp)
}

/// Formats a wall-clock time the way the appointment endpoints expect it,
/// e.g. `30-Apr-2024 22:30:00`.
pub fn zoho_time(time: NaiveDateTime) -> String {
    time.format("%d-%b-%Y %H:%M:%S").to_string()
}
