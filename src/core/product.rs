//! Product records as delivered by a catalog feed

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Identifier of a product
///
/// Catalog feeds emit either numeric or string ids, so both are accepted and
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Number(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        ProductId::Number(id.into())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

/// A catalog entry
///
/// Products are immutable once fetched: the engine only ever reads them and
/// clones the matching ones into its output.
///
/// The id and name must be non-empty, price finite and non-negative, rating
/// finite and within `[0, 5]`. These bounds are checked by [`Validate`] at the catalog boundary; a
/// product built by hand with out-of-range values is still accepted by the
/// engine and simply compared literally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[validate(custom(function = "non_blank_id"))]
    pub id: ProductId,

    #[validate(length(min = 1))]
    pub name: String,

    pub category: String,

    pub brand: String,

    #[validate(custom(function = "finite"), range(min = 0.0))]
    pub price: f64,

    #[validate(custom(function = "finite"), range(min = 0.0, max = 5.0))]
    pub rating: f64,

    #[serde(default)]
    pub image_url: String,
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

fn non_blank_id(id: &ProductId) -> Result<(), ValidationError> {
    match id {
        ProductId::Text(text) if text.trim().is_empty() => Err(ValidationError::new("blank_id")),
        _ => Ok(()),
    }
}

impl Product {
    /// Create a product without an image
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
            rating,
            image_url: String::new(),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }
}
