use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::config::Config;
use crate::domain::models::operation::{
    AppointmentAction, BookAppointment, RescheduleAppointment, ResourceQuery, ServiceQuery,
    StaffQuery, WorkspaceQuery,
};
use crate::domain::ports::{BookingsApi, TokenProvider};
use crate::domain::services::dates::zoho_time;
use crate::error::ConnectorError;

/// `reqwest` client for the Zoho Bookings v1 JSON API.
///
/// Authentication is delegated: each request fetches the current access
/// token from the [`TokenProvider`] and sends it as a `Zoho-oauthtoken`
/// authorization header. Write endpoints take `multipart/form-data` bodies;
/// reads use query strings. Responses are passed through as raw JSON.
pub struct ZohoClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ZohoClient {
    pub fn new(config: &Config, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.region.base_url(),
            tokens,
        }
    }

    /// Base URL override for hosts that proxy the upstream API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ConnectorError> {
        let token = self.tokens.access_token().await?;
        debug!(path, "GET {}", self.base_url);

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .header("Authorization", format!("Zoho-oauthtoken {}", token))
            .query(query)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn post_form(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<Value, ConnectorError> {
        let token = self.tokens.access_token().await?;
        debug!(path, "POST {}", self.base_url);

        let mut form = multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .header("Authorization", format!("Zoho-oauthtoken {}", token))
            .multipart(form)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn into_json(response: Response) -> Result<Value, ConnectorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Zoho API call failed. Status: {}, Body: {}", status, body);
            return Err(ConnectorError::Upstream { status, body });
        }

        // Zoho replies with JSON regardless of the request content type.
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|_| {
            error!("Unparseable response from Zoho: {}", text);
            ConnectorError::UnexpectedBody(text)
        })
    }
}

/// Form fields for the `appointment` endpoint. `customer_details` carries
/// only the fixed fields; free-form fields travel separately as
/// `additional_fields`.
fn book_form(booking: &BookAppointment) -> Result<Vec<(String, String)>, ConnectorError> {
    let mut fields = vec![
        ("service_id".to_string(), booking.service_id.clone()),
        ("staff_id".to_string(), booking.staff_id.clone()),
        ("from_time".to_string(), zoho_time(booking.start_time)),
        (
            "customer_details".to_string(),
            serde_json::to_string(&booking.customer)?,
        ),
    ];

    if !booking.custom_fields.is_empty() {
        fields.push((
            "additional_fields".to_string(),
            booking.custom_fields.to_value().to_string(),
        ));
    }
    if let Some(resource_id) = &booking.resource_id {
        fields.push(("resource_id".to_string(), resource_id.clone()));
    }
    if let Some(group_id) = &booking.group_id {
        fields.push(("group_id".to_string(), group_id.clone()));
    }
    if let Some(time_zone) = &booking.time_zone {
        fields.push(("time_zone".to_string(), time_zone.clone()));
    }

    Ok(fields)
}

fn reschedule_form(reschedule: &RescheduleAppointment) -> Vec<(String, String)> {
    let mut fields = vec![
        ("booking_id".to_string(), strip_id(&reschedule.booking_id)),
        ("start_time".to_string(), zoho_time(reschedule.start_time)),
    ];

    if let Some(staff_id) = &reschedule.staff_id {
        fields.push(("staff_id".to_string(), staff_id.clone()));
    }
    if let Some(time_zone) = &reschedule.time_zone {
        fields.push(("time_zone".to_string(), time_zone.clone()));
    }

    fields
}

/// User-facing booking IDs carry a `#` prefix the API does not accept.
fn strip_id(booking_id: &str) -> String {
    booking_id.replace('#', "")
}

#[async_trait]
impl BookingsApi for ZohoClient {
    #[instrument(skip(self, booking), fields(service_id = %booking.service_id))]
    async fn book_appointment(&self, booking: &BookAppointment) -> Result<Value, ConnectorError> {
        self.post_form("appointment", book_form(booking)?).await
    }

    #[instrument(skip(self, reschedule), fields(booking_id = %reschedule.booking_id))]
    async fn reschedule_appointment(
        &self,
        reschedule: &RescheduleAppointment,
    ) -> Result<Value, ConnectorError> {
        self.post_form("rescheduleappointment", reschedule_form(reschedule))
            .await
    }

    #[instrument(skip(self))]
    async fn appointment_details(&self, booking_id: &str) -> Result<Value, ConnectorError> {
        let booking_id = strip_id(booking_id);
        self.get_json("getappointment", &[("booking_id", booking_id.as_str())])
            .await
    }

    #[instrument(skip(self))]
    async fn update_appointment_status(
        &self,
        booking_id: &str,
        action: AppointmentAction,
    ) -> Result<Value, ConnectorError> {
        self.post_form(
            "updateappointment",
            vec![
                ("booking_id".to_string(), strip_id(booking_id)),
                ("action".to_string(), action.as_str().to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn availability_for_date(
        &self,
        service_id: &str,
        staff_id: &str,
        selected_date: &str,
    ) -> Result<Value, ConnectorError> {
        self.get_json(
            "availableslots",
            &[
                ("service_id", service_id),
                ("staff_id", staff_id),
                ("selected_date", selected_date),
            ],
        )
        .await
    }

    #[instrument(skip(self, query))]
    async fn staff(&self, query: &StaffQuery) -> Result<Value, ConnectorError> {
        let mut filter: Vec<(&str, &str)> = Vec::new();
        if let Some(staff_id) = &query.staff_id {
            filter.push(("staff_id", staff_id));
        } else if let Some(service_id) = &query.service_id {
            filter.push(("service_id", service_id));
        }
        self.get_json("staffs", &filter).await
    }

    #[instrument(skip(self, query))]
    async fn workspaces(&self, query: &WorkspaceQuery) -> Result<Value, ConnectorError> {
        let mut filter: Vec<(&str, &str)> = Vec::new();
        if let Some(workspace_id) = &query.workspace_id {
            filter.push(("workspace_id", workspace_id));
        }
        self.get_json("workspaces", &filter).await
    }

    #[instrument(skip(self, query), fields(workspace_id = %query.workspace_id))]
    async fn services(&self, query: &ServiceQuery) -> Result<Value, ConnectorError> {
        let mut filter: Vec<(&str, &str)> = vec![("workspace_id", &query.workspace_id)];
        if let Some(staff_id) = &query.staff_id {
            filter.push(("staff_id", staff_id));
        } else if let Some(service_id) = &query.service_id {
            filter.push(("service_id", service_id));
        }
        self.get_json("services", &filter).await
    }

    #[instrument(skip(self, query))]
    async fn resources(&self, query: &ResourceQuery) -> Result<Value, ConnectorError> {
        let mut filter: Vec<(&str, &str)> = Vec::new();
        if let Some(resource_id) = &query.resource_id {
            filter.push(("resource_id", resource_id));
        } else if let Some(service_id) = &query.service_id {
            filter.push(("service_id", service_id));
        }
        self.get_json("resources", &filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::customer::{CustomFields, CustomerDetails};
    use chrono::NaiveDate;

    fn sample_booking() -> BookAppointment {
        let mut custom_fields = CustomFields::new();
        custom_fields.insert("street", "1234 Street Rd");

        BookAppointment {
            service_id: "4378218000000746058".to_string(),
            staff_id: "4378218000009548412".to_string(),
            start_time: NaiveDate::from_ymd_opt(2019, 4, 30)
                .unwrap()
                .and_hms_opt(22, 30, 0)
                .unwrap(),
            customer: CustomerDetails::new("John Smith", "name@email.com")
                .with_phone("(215) 555-5555"),
            custom_fields,
            resource_id: None,
            group_id: Some("grp-1".to_string()),
            time_zone: Some("America/New_York".to_string()),
        }
    }

    fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn book_form_converts_time_and_splits_customer_payloads() {
        let fields = book_form(&sample_booking()).unwrap();

        assert_eq!(field(&fields, "from_time"), Some("30-Apr-2019 22:30:00"));
        assert_eq!(field(&fields, "group_id"), Some("grp-1"));
        assert_eq!(field(&fields, "time_zone"), Some("America/New_York"));
        assert_eq!(field(&fields, "resource_id"), None);

        let details: Value = serde_json::from_str(field(&fields, "customer_details").unwrap()).unwrap();
        assert_eq!(details["name"], "John Smith");
        assert_eq!(details["phone_number"], "(215) 555-5555");
        assert!(details.get("street").is_none());

        let additional: Value =
            serde_json::from_str(field(&fields, "additional_fields").unwrap()).unwrap();
        assert_eq!(additional["street"], "1234 Street Rd");
    }

    #[test]
    fn book_form_omits_empty_custom_fields() {
        let mut booking = sample_booking();
        booking.custom_fields = CustomFields::new();
        let fields = book_form(&booking).unwrap();
        assert_eq!(field(&fields, "additional_fields"), None);
    }

    #[test]
    fn reschedule_form_strips_booking_id_prefix() {
        let fields = reschedule_form(&RescheduleAppointment {
            booking_id: "#appt-06594".to_string(),
            start_time: NaiveDate::from_ymd_opt(2019, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            staff_id: None,
            time_zone: None,
        });

        assert_eq!(field(&fields, "booking_id"), Some("appt-06594"));
        assert_eq!(field(&fields, "start_time"), Some("01-May-2019 09:00:00"));
        assert_eq!(field(&fields, "staff_id"), None);
    }
}
