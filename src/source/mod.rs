//! Catalog sources: where the unfiltered product collection comes from
//!
//! A source is read exactly once per load and hands back the whole
//! collection. The engine never talks to a source directly; the
//! [`CatalogSession`](crate::session::CatalogSession) does.

#[cfg(feature = "http")]
pub mod http;
pub mod in_memory;

#[cfg(feature = "http")]
pub use http::HttpCatalogSource;
pub use in_memory::InMemoryCatalogSource;

use crate::core::{Product, SourceError};
use async_trait::async_trait;
use serde_json::Value;
use validator::Validate;

/// Supplier of the full, unfiltered product collection
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short name used in logs and errors (a URL, "memory", ...)
    fn name(&self) -> &str;

    /// Fetch every product
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;
}

/// Decode a JSON product feed
///
/// The payload must be an array. Records that fail to deserialize or fail
/// [`Product`] validation (blank id or name, out-of-range price or rating)
/// are skipped with a warning so one bad row does not take the whole catalog
/// down.
pub fn decode_products(source_name: &str, payload: Value) -> Result<Vec<Product>, SourceError> {
    let Value::Array(records) = payload else {
        return Err(SourceError::decode(
            source_name,
            "expected a JSON array of products",
        ));
    };

    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let product = match serde_json::from_value::<Product>(record) {
                Ok(product) => product,
                Err(e) => {
                    tracing::warn!(source = source_name, index, error = %e, "Skipping malformed product record");
                    return None;
                }
            };
            if let Err(e) = product.validate() {
                tracing::warn!(source = source_name, id = %product.id, error = %e, "Skipping invalid product");
                return None;
            }
            Some(product)
        })
        .collect();

    tracing::debug!(
        source = source_name,
        total,
        accepted = products.len(),
        "Decoded product feed"
    );

    Ok(products)
}
