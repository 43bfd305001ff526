use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConnectorError;

/// Fixed customer fields sent upstream as the `customer_details` object.
///
/// Zoho merges these with an existing customer when the values match, so the
/// connector sends them exactly as collected.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl CustomerDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }
}

/// Free-form custom customer fields: an ordered association list with
/// last-write-wins semantics per key. Sent upstream as the
/// `additional_fields` JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFields {
    entries: Vec<(String, String)>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw JSON object blob into custom fields. Scalar values are
    /// stringified; nested arrays or objects are rejected.
    pub fn from_json(raw: &str) -> Result<Self, ConnectorError> {
        use serde::de::Error as _;

        let parsed: Map<String, Value> = serde_json::from_str(raw)?;
        let mut fields = Self::new();
        for (key, value) in parsed {
            let rendered = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ConnectorError::CustomFieldsJson(serde_json::Error::custom(
                        format!("custom field '{}' must be a scalar value", key),
                    )))
                }
            };
            fields.insert(key, rendered);
        }
        Ok(fields)
    }

    /// Sets a field, replacing any earlier value for the same key in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn extend_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.insert(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the fields as a JSON object, preserving insertion order.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}
