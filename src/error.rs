use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Invalid time zone: {message}")]
    InvalidTimeZone { message: String, item_index: usize },
    #[error("Start time is after the end time: {message}")]
    StartAfterEnd { message: String, item_index: usize },
    #[error("Missing required field: {message}")]
    MissingField { message: String, item_index: usize },
    #[error("Invalid input: {message}")]
    Validation { message: String, item_index: usize },
    #[error("Invalid custom fields JSON: {0}")]
    CustomFieldsJson(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Zoho API returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
    #[error("Item {item_index} failed: {source}")]
    Item {
        item_index: usize,
        #[source]
        source: Box<ConnectorError>,
    },
}

impl ConnectorError {
    /// Index of the input item this failure is attributable to, when known.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            ConnectorError::InvalidTimeZone { item_index, .. }
            | ConnectorError::StartAfterEnd { item_index, .. }
            | ConnectorError::MissingField { item_index, .. }
            | ConnectorError::Validation { item_index, .. }
            | ConnectorError::Item { item_index, .. } => Some(*item_index),
            _ => None,
        }
    }

    /// Attaches an item index to errors that do not already carry one.
    pub fn with_item_index(self, item_index: usize) -> Self {
        if self.item_index().is_some() {
            return self;
        }
        ConnectorError::Item {
            item_index,
            source: Box::new(self),
        }
    }
}
