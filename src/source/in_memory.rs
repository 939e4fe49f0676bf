//! In-memory catalog source for testing and development

use super::CatalogSource;
use crate::core::{Product, SourceError};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    outage: Option<String>,
}

/// In-memory catalog source
///
/// Useful for testing and development. The catalog can be swapped and an
/// outage simulated at any time; clones share the same state.
#[derive(Clone, Default)]
pub struct InMemoryCatalogSource {
    state: Arc<RwLock<State>>,
    latency: Option<Duration>,
}

impl InMemoryCatalogSource {
    /// Create an empty in-memory source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source serving `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                products,
                outage: None,
            })),
            latency: None,
        }
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Replace the served catalog
    pub fn replace(&self, products: Vec<Product>) -> Result<(), SourceError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| {
                SourceError::unavailable(self.name(), format!("Failed to acquire write lock: {}", e))
            })?;
        state.products = products;
        Ok(())
    }

    /// Make subsequent fetches fail with `message`, or succeed again with `None`
    pub fn set_outage(&self, message: Option<&str>) -> Result<(), SourceError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| {
                SourceError::unavailable(self.name(), format!("Failed to acquire write lock: {}", e))
            })?;
        state.outage = message.map(str::to_string);
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let state = self
            .state
            .read()
            .map_err(|e| {
                SourceError::unavailable(self.name(), format!("Failed to acquire read lock: {}", e))
            })?;

        match &state.outage {
            Some(message) => Err(SourceError::unavailable(self.name(), message)),
            None => Ok(state.products.clone()),
        }
    }
}
