use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::error::ConnectorError;

/// Checks that a time zone exists and is formatted like `America/New_York`.
///
/// Values without a `/` are rejected outright, before any database lookup.
/// Everything else is resolved against the IANA database; on failure the
/// library's own reason is passed along.
pub fn check_time_zone(time_zone: &str, item_index: usize) -> Result<Tz, ConnectorError> {
    if !time_zone.contains('/') {
        return Err(ConnectorError::InvalidTimeZone {
            message: format!(
                "the time zone '{}' isn't valid. Format it like 'America/New_York'",
                time_zone
            ),
            item_index,
        });
    }

    time_zone
        .parse::<Tz>()
        .map_err(|reason| ConnectorError::InvalidTimeZone {
            message: format!("the time zone '{}' isn't valid: {}", time_zone, reason),
            item_index,
        })
}

/// Checks that the start time does not happen after the end time.
pub fn check_start_before_end(
    start: NaiveDateTime,
    end: NaiveDateTime,
    item_index: usize,
) -> Result<(), ConnectorError> {
    if start > end {
        return Err(ConnectorError::StartAfterEnd {
            message: format!(
                "the start time '{}' happens after the end time '{}'",
                start.format("%b %d %Y %H:%M:%S"),
                end.format("%b %d %Y %H:%M:%S")
            ),
            item_index,
        });
    }
    Ok(())
}

/// Checks that a required field value is present and non-empty.
pub fn check_required(value: &str, field: &str, item_index: usize) -> Result<(), ConnectorError> {
    if value.trim().is_empty() {
        return Err(ConnectorError::MissingField {
            message: format!("'{}' is required", field),
            item_index,
        });
    }
    Ok(())
}

/// Parses a wall-clock field value. Accepts `YYYY-MM-DD HH:MM:SS`, the ISO
/// `T` variants (with or without a trailing offset), and bare dates, which
/// land on midnight.
pub fn parse_date_time(
    value: &str,
    field: &str,
    item_index: usize,
) -> Result<NaiveDateTime, ConnectorError> {
    check_required(value, field, item_index)?;

    let value = value.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(parsed);
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(parsed.and_hms_opt(0, 0, 0).unwrap_or_default());
    }

    Err(ConnectorError::Validation {
        message: format!(
            "'{}' has an unrecognized date format: '{}'. Use 'YYYY-MM-DD HH:MM:SS'",
            field, value
        ),
        item_index,
    })
}
