use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use zoho_bookings::domain::models::operation::{
    AppointmentAction, BookAppointment, RescheduleAppointment, ResourceQuery, ServiceQuery,
    StaffQuery, WorkspaceQuery,
};
use zoho_bookings::domain::ports::BookingsApi;
use zoho_bookings::error::ConnectorError;

/// In-memory stand-in for the upstream API. Records every call it receives
/// and answers from a scripted slot table.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<String>>,
    slots: HashMap<String, Vec<String>>,
    fail_days: Vec<String>,
    fail_bookings: bool,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts open slots for a day (`dd-MMM-yyyy`). Unscripted days answer
    /// with the upstream "Slots Not Available" sentinel.
    pub fn with_slots(mut self, day: &str, times: &[&str]) -> Self {
        self.slots
            .insert(day.to_string(), times.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Makes the availability query for one day fail with an upstream error.
    pub fn failing_on_day(mut self, day: &str) -> Self {
        self.fail_days.push(day.to_string());
        self
    }

    /// Makes every booking attempt fail with an upstream error.
    pub fn failing_bookings(mut self) -> Self {
        self.fail_bookings = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn upstream_error() -> ConnectorError {
        ConnectorError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl BookingsApi for ScriptedApi {
    async fn book_appointment(&self, booking: &BookAppointment) -> Result<Value, ConnectorError> {
        self.record(format!("appointment service={}", booking.service_id));
        if self.fail_bookings {
            return Err(Self::upstream_error());
        }
        Ok(json!({
            "response": { "returnvalue": { "booking_id": "appt-00001", "status": "upcoming" } }
        }))
    }

    async fn reschedule_appointment(
        &self,
        reschedule: &RescheduleAppointment,
    ) -> Result<Value, ConnectorError> {
        self.record(format!("rescheduleappointment booking={}", reschedule.booking_id));
        Ok(json!({
            "response": { "returnvalue": { "booking_id": reschedule.booking_id } }
        }))
    }

    async fn appointment_details(&self, booking_id: &str) -> Result<Value, ConnectorError> {
        self.record(format!("getappointment booking={}", booking_id));
        Ok(json!({
            "response": { "returnvalue": { "booking_id": booking_id } }
        }))
    }

    async fn update_appointment_status(
        &self,
        booking_id: &str,
        action: AppointmentAction,
    ) -> Result<Value, ConnectorError> {
        self.record(format!(
            "updateappointment booking={} action={}",
            booking_id,
            action.as_str()
        ));
        Ok(json!({
            "response": { "returnvalue": { "booking_id": booking_id, "action": action.as_str() } }
        }))
    }

    async fn availability_for_date(
        &self,
        _service_id: &str,
        _staff_id: &str,
        selected_date: &str,
    ) -> Result<Value, ConnectorError> {
        self.record(format!("availableslots date={}", selected_date));

        let day = selected_date.split(' ').next().unwrap_or(selected_date);
        if self.fail_days.iter().any(|d| d == day) {
            return Err(Self::upstream_error());
        }

        let data = match self.slots.get(day) {
            Some(times) => json!(times),
            None => json!("Slots Not Available"),
        };
        Ok(json!({ "response": { "returnvalue": { "data": data } } }))
    }

    async fn staff(&self, query: &StaffQuery) -> Result<Value, ConnectorError> {
        self.record(format!(
            "staffs staff={:?} service={:?}",
            query.staff_id, query.service_id
        ));
        Ok(json!({ "response": { "returnvalue": { "data": [] } } }))
    }

    async fn workspaces(&self, query: &WorkspaceQuery) -> Result<Value, ConnectorError> {
        self.record(format!("workspaces workspace={:?}", query.workspace_id));
        Ok(json!({ "response": { "returnvalue": { "data": [] } } }))
    }

    async fn services(&self, query: &ServiceQuery) -> Result<Value, ConnectorError> {
        self.record(format!("services workspace={}", query.workspace_id));
        Ok(json!({ "response": { "returnvalue": { "data": [] } } }))
    }

    async fn resources(&self, query: &ResourceQuery) -> Result<Value, ConnectorError> {
        self.record(format!(
            "resources resource={:?} service={:?}",
            query.resource_id, query.service_id
        ));
        Ok(json!({ "response": { "returnvalue": { "data": [] } } }))
    }
}
