//! Typed error handling for catalog filtering
//!
//! Errors are split by the layer that raises them so callers can react to
//! each one specifically instead of matching on strings.
//!
//! # Error Categories
//!
//! - [`FilterError`]: rejected filter or sort input (raised by the engine and
//!   the control surface)
//! - [`SourceError`]: the catalog could not be fetched or decoded
//!
//! [`CatalogError`] wraps both for APIs that can fail either way.
//!
//! # Example
//!
//! ```rust
//! use catalog::prelude::*;
//!
//! let criteria = FilterCriteria::default().with_price_range(PriceRange::new(-1.0, 10.0));
//! match select(&[], &criteria, SortKey::None) {
//!     Err(FilterError::InvalidRange { min, .. }) => assert_eq!(min, -1.0),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Errors raised while applying filter criteria or a sort key
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// A price bound is NaN, infinite or negative
    ///
    /// An inverted range (`min > max`) is *not* an error; it simply matches
    /// nothing.
    #[error("Invalid price range [{min}, {max}]: bounds must be finite and non-negative")]
    InvalidRange { min: f64, max: f64 },

    /// A sort token that does not name any [`SortKey`](crate::core::SortKey)
    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),
}

impl FilterError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::InvalidRange { .. } => "INVALID_RANGE",
            FilterError::UnknownSortKey(_) => "UNKNOWN_SORT_KEY",
        }
    }
}

/// Errors raised by a [`CatalogSource`](crate::source::CatalogSource)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not be reached or answered with a failure status
    #[error("Catalog source '{source_name}' unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    /// The source answered but the payload is not a product list
    #[error("Failed to decode catalog from '{source_name}': {message}")]
    Decode {
        source_name: String,
        message: String,
    },
}

impl SourceError {
    pub fn unavailable(source_name: impl Into<String>, message: impl ToString) -> Self {
        SourceError::Unavailable {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(source_name: impl Into<String>, message: impl ToString) -> Self {
        SourceError::Decode {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "SOURCE_UNAVAILABLE",
            SourceError::Decode { .. } => "SOURCE_DECODE_ERROR",
        }
    }
}

/// Any error the catalog layer can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl CatalogError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Filter(e) => e.error_code(),
            CatalogError::Source(e) => e.error_code(),
        }
    }
}
