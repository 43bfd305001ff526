use serde_json::{Map, Value};
use tracing::{error, info_span, Instrument};

use crate::domain::models::operation::{AppointmentAction, Operation};
use crate::domain::ports::BookingsApi;
use crate::domain::services::{availability, validation};
use crate::error::ConnectorError;

/// One workflow item flowing into the connector.
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub json: Map<String, Value>,
}

impl Item {
    pub fn new(json: Map<String, Value>) -> Self {
        Self { json }
    }
}

/// An item after execution: the input JSON with the upstream response
/// attached under the operation's output key, or annotated with the error
/// that stopped it.
#[derive(Debug, Clone)]
pub struct ExecutedItem {
    pub json: Map<String, Value>,
    pub error: Option<String>,
    pub paired_item: usize,
}

/// Runs a batch of items through the connector, strictly sequentially.
///
/// With `continue_on_fail` set, a failing item is passed through annotated
/// with its error and siblings keep executing; otherwise the first failure
/// aborts the batch, wrapped so it carries the triggering item index.
pub async fn execute(
    api: &dyn BookingsApi,
    items: Vec<(Item, Operation)>,
    continue_on_fail: bool,
) -> Result<Vec<ExecutedItem>, ConnectorError> {
    let mut output = Vec::with_capacity(items.len());

    for (item_index, (item, operation)) in items.into_iter().enumerate() {
        let span = info_span!("bookings_item", item_index);
        let result = run_item(api, &operation, item_index).instrument(span).await;

        match result {
            Ok(response) => {
                let mut json = item.json;
                json.insert(operation.output_key().to_string(), response);
                output.push(ExecutedItem {
                    json,
                    error: None,
                    paired_item: item_index,
                });
            }
            Err(err) if continue_on_fail => {
                error!("item {} failed: {}", item_index, err);
                output.push(ExecutedItem {
                    json: item.json,
                    error: Some(err.to_string()),
                    paired_item: item_index,
                });
            }
            Err(err) => return Err(err.with_item_index(item_index)),
        }
    }

    Ok(output)
}

/// Validates and dispatches a single item. All validation happens before
/// any network call so failures stay attributable to the item.
async fn run_item(
    api: &dyn BookingsApi,
    operation: &Operation,
    item_index: usize,
) -> Result<Value, ConnectorError> {
    match operation {
        Operation::BookAppointment(booking) => {
            if let Some(time_zone) = &booking.time_zone {
                validation::check_time_zone(time_zone, item_index)?;
            }
            api.book_appointment(booking).await
        }
        Operation::RescheduleAppointment(reschedule) => {
            if let Some(time_zone) = &reschedule.time_zone {
                validation::check_time_zone(time_zone, item_index)?;
            }
            api.reschedule_appointment(reschedule).await
        }
        Operation::GetAppointment { booking_id } => api.appointment_details(booking_id).await,
        Operation::CancelAppointment { booking_id } => {
            api.update_appointment_status(booking_id, AppointmentAction::Cancel)
                .await
        }
        Operation::MarkAsNoShow { booking_id } => {
            api.update_appointment_status(booking_id, AppointmentAction::NoShow)
                .await
        }
        Operation::MarkAsCompleted { booking_id } => {
            api.update_appointment_status(booking_id, AppointmentAction::Completed)
                .await
        }
        Operation::GetAvailability(range) => {
            validation::check_start_before_end(range.start, range.end, item_index)?;
            let times = availability::availability_for_range(
                api,
                &range.service_id,
                &range.staff_id,
                range.start,
                range.end,
            )
            .await?;
            Ok(Value::from(times))
        }
        Operation::GetStaff(query) => api.staff(query).await,
        Operation::GetWorkspaces(query) => api.workspaces(query).await,
        Operation::GetServices(query) => api.services(query).await,
        Operation::GetResources(query) => api.resources(query).await,
    }
}
