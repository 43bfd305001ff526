use chrono::NaiveDateTime;

use super::customer::{CustomFields, CustomerDetails};
use crate::domain::services::validation::parse_date_time;
use crate::error::ConnectorError;

/// Status transition driven through the `updateappointment` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Cancel,
    Completed,
    NoShow,
}

impl AppointmentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentAction::Cancel => "cancel",
            AppointmentAction::Completed => "completed",
            AppointmentAction::NoShow => "noshow",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookAppointment {
    pub service_id: String,
    pub staff_id: String,
    /// Wall-clock start in the booking's own time zone.
    pub start_time: NaiveDateTime,
    pub customer: CustomerDetails,
    pub custom_fields: CustomFields,
    pub resource_id: Option<String>,
    pub group_id: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RescheduleAppointment {
    pub booking_id: String,
    pub start_time: NaiveDateTime,
    pub staff_id: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AvailabilityRange {
    pub service_id: String,
    pub staff_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AvailabilityRange {
    /// Builds a range from raw field values, enforcing that both endpoints
    /// are present and parseable before any expansion happens.
    pub fn parse(
        service_id: impl Into<String>,
        staff_id: impl Into<String>,
        start: &str,
        end: &str,
        item_index: usize,
    ) -> Result<Self, ConnectorError> {
        Ok(Self {
            service_id: service_id.into(),
            staff_id: staff_id.into(),
            start: parse_date_time(start, "startOfSearchRange", item_index)?,
            end: parse_date_time(end, "endOfSearchRange", item_index)?,
        })
    }
}

/// Staff lookup: by staff ID, by assigned service, or the whole account.
/// A staff ID takes precedence when both filters are set.
#[derive(Debug, Clone, Default)]
pub struct StaffQuery {
    pub staff_id: Option<String>,
    pub service_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceQuery {
    pub workspace_id: Option<String>,
}

/// Service lookup is always scoped to a workspace; the staff filter takes
/// precedence over the service filter when both are set.
#[derive(Debug, Clone)]
pub struct ServiceQuery {
    pub workspace_id: String,
    pub staff_id: Option<String>,
    pub service_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    pub resource_id: Option<String>,
    pub service_id: Option<String>,
}

/// One fully-collected {resource x operation} selection for a single item.
#[derive(Debug, Clone)]
pub enum Operation {
    BookAppointment(BookAppointment),
    RescheduleAppointment(RescheduleAppointment),
    GetAppointment { booking_id: String },
    CancelAppointment { booking_id: String },
    MarkAsNoShow { booking_id: String },
    MarkAsCompleted { booking_id: String },
    GetAvailability(AvailabilityRange),
    GetStaff(StaffQuery),
    GetWorkspaces(WorkspaceQuery),
    GetServices(ServiceQuery),
    GetResources(ResourceQuery),
}

impl Operation {
    /// Key under which the upstream response is attached to the item.
    pub fn output_key(&self) -> &'static str {
        match self {
            Operation::BookAppointment(_)
            | Operation::RescheduleAppointment(_)
            | Operation::GetAppointment { .. }
            | Operation::CancelAppointment { .. }
            | Operation::MarkAsNoShow { .. }
            | Operation::MarkAsCompleted { .. } => "zohoResponse",
            Operation::GetAvailability(_) => "availableTimeSlots",
            Operation::GetStaff(_) => "staffInfo",
            Operation::GetWorkspaces(_) => "workspaceInfo",
            Operation::GetServices(_) => "serviceInfo",
            Operation::GetResources(_) => "resourcesInfo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parse_requires_both_endpoints() {
        let err = AvailabilityRange::parse("svc", "staff", "", "2024-05-01", 2).unwrap_err();
        assert!(matches!(err, ConnectorError::MissingField { .. }));
        assert_eq!(err.item_index(), Some(2));

        let err = AvailabilityRange::parse("svc", "staff", "2024-05-01", "  ", 2).unwrap_err();
        assert!(matches!(err, ConnectorError::MissingField { .. }));

        let range =
            AvailabilityRange::parse("svc", "staff", "2024-05-01", "2024-05-03 18:00:00", 0)
                .unwrap();
        assert_eq!(range.start.date().to_string(), "2024-05-01");
        assert_eq!(range.end.date().to_string(), "2024-05-03");
    }
}
