//! HTTP catalog source for JSON product feeds

use super::{CatalogSource, decode_products};
use crate::config::SourceConfig;
use crate::core::{Product, SourceError};
use async_trait::async_trait;
use std::time::Duration;

/// Catalog source reading a JSON array of products from a URL
///
/// Matches json-server style endpoints such as
/// `GET http://localhost:3004/products`.
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::unavailable(url.as_str(), e))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::new(
            config.url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        tracing::debug!(url = %self.url, "Fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SourceError::unavailable(self.url.as_str(), e))?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SourceError::decode(self.url.as_str(), e))?;

        decode_products(&self.url, payload)
    }
}
