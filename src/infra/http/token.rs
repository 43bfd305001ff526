use async_trait::async_trait;

use crate::domain::ports::TokenProvider;
use crate::error::ConnectorError;

/// Token provider for hosts that already hold a valid OAuth access token.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConnectorError> {
        std::env::var("ZOHO_OAUTH_TOKEN")
            .map(Self::new)
            .map_err(|_| ConnectorError::Config("ZOHO_OAUTH_TOKEN must be set".to_string()))
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, ConnectorError> {
        Ok(self.token.clone())
    }
}
