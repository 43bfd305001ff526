use async_trait::async_trait;
use serde_json::Value;

use crate::domain::models::operation::{
    AppointmentAction, BookAppointment, RescheduleAppointment, ResourceQuery, ServiceQuery,
    StaffQuery, WorkspaceQuery,
};
use crate::error::ConnectorError;

/// Supplies the OAuth access token held by the host platform's credential
/// subsystem. The connector never acquires or refreshes tokens itself.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, ConnectorError>;
}

/// Upstream scheduling API surface, one method per REST operation.
/// Responses are passed through as raw JSON.
#[async_trait]
pub trait BookingsApi: Send + Sync {
    async fn book_appointment(&self, booking: &BookAppointment) -> Result<Value, ConnectorError>;

    async fn reschedule_appointment(
        &self,
        reschedule: &RescheduleAppointment,
    ) -> Result<Value, ConnectorError>;

    async fn appointment_details(&self, booking_id: &str) -> Result<Value, ConnectorError>;

    async fn update_appointment_status(
        &self,
        booking_id: &str,
        action: AppointmentAction,
    ) -> Result<Value, ConnectorError>;

    /// One per-day availability query; `selected_date` is a day-stamp in the
    /// upstream `dd-MMM-yyyy 00:00:00` format.
    async fn availability_for_date(
        &self,
        service_id: &str,
        staff_id: &str,
        selected_date: &str,
    ) -> Result<Value, ConnectorError>;

    async fn staff(&self, query: &StaffQuery) -> Result<Value, ConnectorError>;

    async fn workspaces(&self, query: &WorkspaceQuery) -> Result<Value, ConnectorError>;

    async fn services(&self, query: &ServiceQuery) -> Result<Value, ConnectorError>;

    async fn resources(&self, query: &ResourceQuery) -> Result<Value, ConnectorError>;
}
