use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::BookingsApi;
use crate::domain::services::dates::{day_of, make_date_list};
use crate::error::ConnectorError;

/// Upstream's way of saying a day has no open slots.
const NO_SLOTS_SENTINEL: &str = "Slots Not Available";

/// Digs the slot payload out of the `availableslots` response envelope.
fn slot_data(response: &Value) -> Option<&Value> {
    response.get("response")?.get("returnvalue")?.get("data")
}

/// Collects available times across a date range.
///
/// One upstream query is issued per day-stamp, strictly sequentially; a
/// failing day aborts the whole range. Days answering with the no-slots
/// sentinel contribute nothing; every returned time is prefixed with its
/// day-stamp, preserving expansion order.
pub async fn availability_for_range(
    api: &dyn BookingsApi,
    service_id: &str,
    staff_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<String>, ConnectorError> {
    let dates = make_date_list(start, end);
    debug!(days = dates.len(), service_id, staff_id, "querying availability range");

    let mut available_times = Vec::new();

    for stamp in &dates {
        let response = api
            .availability_for_date(service_id, staff_id, stamp)
            .await?;
        let day = day_of(stamp);

        match slot_data(&response) {
            Some(Value::Array(times)) => {
                for time in times {
                    if let Some(time) = time.as_str() {
                        available_times.push(format!("{} {}", day, time));
                    }
                }
            }
            Some(Value::String(text)) if text == NO_SLOTS_SENTINEL => {
                debug!(day, "no slots available");
            }
            other => {
                debug!(day, ?other, "skipping unexpected slot payload");
            }
        }
    }

    Ok(available_times)
}
