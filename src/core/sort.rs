//! Sort keys and their comparators
//!
//! All orderings are applied with a stable sort, so products that compare
//! equal keep the order they had after filtering.

use super::error::FilterError;
use super::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the filtered products are ordered
///
/// Serialized with the tokens used by storefront sort controls
/// (`"price-low-high"`, `"price-high-low"`, ...). `None` serializes as the
/// empty string. Deserialization and `FromStr` accept the same tokens,
/// including the `field:dir` spellings; only `FromStr` trims whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep the filtered order
    #[default]
    #[serde(rename = "", alias = "none", alias = "default")]
    None,

    #[serde(rename = "price-low-high", alias = "price:asc", alias = "price")]
    PriceAsc,

    #[serde(rename = "price-high-low", alias = "price:desc")]
    PriceDesc,

    #[serde(rename = "rating-high-low", alias = "rating:desc", alias = "rating")]
    RatingDesc,

    /// Recognized but not backed by any metric yet: keeps the filtered order
    #[serde(rename = "popularity")]
    Popularity,
}

/// Comparator over two products
pub type Comparator = fn(&Product, &Product) -> Ordering;

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::Popularity,
    ];

    /// Token used in serialized criteria and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::PriceAsc => "price-low-high",
            SortKey::PriceDesc => "price-high-low",
            SortKey::RatingDesc => "rating-high-low",
            SortKey::Popularity => "popularity",
        }
    }

    /// Human-readable label for a sort picker
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Rating: High to Low",
            SortKey::Popularity => "Popularity",
        }
    }

    /// The comparator for this key, or `None` when the key keeps input order
    pub fn comparator(&self) -> Option<Comparator> {
        match self {
            SortKey::None | SortKey::Popularity => None,
            SortKey::PriceAsc => Some(price_low_high),
            SortKey::PriceDesc => Some(price_high_low),
            SortKey::RatingDesc => Some(rating_high_low),
        }
    }

    /// Whether applying this key can change the order of its input
    pub fn reorders(&self) -> bool {
        self.comparator().is_some()
    }

    /// Stable-sort `products` in place by this key
    pub fn sort(&self, products: &mut [Product]) {
        if let Some(compare) = self.comparator() {
            products.sort_by(compare);
        }
    }
}

fn price_low_high(a: &Product, b: &Product) -> Ordering {
    ascending(a.price, b.price)
}

fn price_high_low(a: &Product, b: &Product) -> Ordering {
    descending(a.price, b.price)
}

fn rating_high_low(a: &Product, b: &Product) -> Ordering {
    descending(a.rating, b.rating)
}

// NaN never compares, so it is ordered after every number in both directions
// to keep the comparator a total order. -0.0 and 0.0 stay equal.
fn ascending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (left, right) => left.cmp(&right),
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (left, right) => left.cmp(&right),
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "default" => Ok(SortKey::None),
            "price-low-high" | "price:asc" | "price" => Ok(SortKey::PriceAsc),
            "price-high-low" | "price:desc" => Ok(SortKey::PriceDesc),
            "rating-high-low" | "rating:desc" | "rating" => Ok(SortKey::RatingDesc),
            "popularity" => Ok(SortKey::Popularity),
            other => Err(FilterError::UnknownSortKey(other.to_string())),
        }
    }
}
