//! Filter criteria: category, brand, price range and minimum rating
//!
//! Every facet uses its empty/zero value to mean "no constraint": an empty
//! category or brand matches everything and a minimum rating of `0` matches
//! every rated product. The price range is always evaluated literally as an
//! inclusive check, so the default `[0, 5000]` is only unconstrained in
//! practice.

use super::error::FilterError;
use super::product::Product;
use serde::{Deserialize, Serialize};

/// Lower bound of the default price range
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Upper bound of the default price range
pub const DEFAULT_MAX_PRICE: f64 = 5000.0;

/// Inclusive price interval `[min, max]`
///
/// Serialized as a two-element array, e.g. `[0, 5000]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check that both bounds are finite and non-negative
    ///
    /// An inverted range passes: it is well-formed and just matches nothing.
    pub fn validate(&self) -> Result<(), FilterError> {
        let valid = |bound: f64| bound.is_finite() && bound >= 0.0;
        if valid(self.min) && valid(self.max) {
            Ok(())
        } else {
            Err(FilterError::InvalidRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

impl From<[f64; 2]> for PriceRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

/// The active combination of facet constraints
///
/// Matching is the logical AND of the four sub-predicates, each inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Required category, empty for any
    pub category: String,

    /// Required brand, empty for any
    pub brand: String,

    pub price_range: PriceRange,

    /// Products rated below this are excluded
    ///
    /// Also read from `rating`. A payload carrying both `rating` and
    /// `minRating` is rejected as a duplicate field.
    #[serde(alias = "rating")]
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: String::new(),
            brand: String::new(),
            price_range: PriceRange::default(),
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Reject criteria the engine cannot evaluate meaningfully
    ///
    /// Only the price bounds are checked. Clamping the rating to `[0, 5]` is
    /// left to whoever builds the criteria.
    pub fn validate(&self) -> Result<(), FilterError> {
        self.price_range.validate()
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || product.category == self.category
    }

    pub fn matches_brand(&self, product: &Product) -> bool {
        self.brand.is_empty() || product.brand == self.brand
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    pub fn matches_rating(&self, product: &Product) -> bool {
        product.rating >= self.min_rating
    }

    /// Whether a product satisfies every facet constraint
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_price(product)
            && self.matches_rating(product)
    }

    /// Whether these are exactly the default criteria
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
