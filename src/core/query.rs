//! Loosely-typed filter controls and their conversion into criteria

use super::criteria::{FilterCriteria, PriceRange};
use super::error::FilterError;
use super::sort::SortKey;
use serde::Deserialize;

/// Raw values coming from a filter control surface
///
/// Every field is optional; a missing value falls back to the defaults passed
/// to [`FilterQuery::into_parts`]. This is the shape a form, a query string or
/// a JSON payload naturally produces.
///
/// # Example
/// ```rust
/// use catalog::prelude::*;
///
/// let query: FilterQuery = serde_json::from_str(
///     r#"{"category": "Shoes", "max_price": 120, "sort": "price-low-high"}"#,
/// ).unwrap();
/// let (criteria, sort) = query.into_parts(&FilterCriteria::default()).unwrap();
///
/// assert_eq!(criteria.category, "Shoes");
/// assert_eq!(criteria.price_range, PriceRange::new(0.0, 120.0));
/// assert_eq!(sort, SortKey::PriceAsc);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Category label, empty or absent for any
    pub category: Option<String>,

    /// Brand label, empty or absent for any
    pub brand: Option<String>,

    #[serde(alias = "minPrice")]
    pub min_price: Option<f64>,

    #[serde(alias = "maxPrice")]
    pub max_price: Option<f64>,

    /// Minimum rating
    #[serde(alias = "min_rating", alias = "minRating")]
    pub rating: Option<f64>,

    /// Sort token, see [`SortKey`]'s `FromStr`
    pub sort: Option<String>,
}

impl FilterQuery {
    /// Parse the sort token, defaulting to [`SortKey::None`]
    pub fn sort_key(&self) -> Result<SortKey, FilterError> {
        self.sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Build structured criteria and a sort key, filling gaps from `defaults`
    ///
    /// The resulting criteria are validated, so a negative or non-finite
    /// price bound is rejected here rather than at selection time.
    pub fn into_parts(
        self,
        defaults: &FilterCriteria,
    ) -> Result<(FilterCriteria, SortKey), FilterError> {
        let sort = self.sort_key()?;

        let criteria = FilterCriteria {
            category: self.category.unwrap_or_else(|| defaults.category.clone()),
            brand: self.brand.unwrap_or_else(|| defaults.brand.clone()),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(defaults.price_range.min),
                self.max_price.unwrap_or(defaults.price_range.max),
            ),
            min_rating: self.rating.unwrap_or(defaults.min_rating),
        };
        criteria.validate()?;

        Ok((criteria, sort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_yields_defaults() {
        let (criteria, sort) = FilterQuery::default()
            .into_parts(&FilterCriteria::default())
            .unwrap();

        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(sort, SortKey::None);
    }

    #[test]
    fn test_partial_query_keeps_other_defaults() {
        let defaults = FilterCriteria::default().with_min_rating(2.0);
        let query: FilterQuery = serde_json::from_value(json!({ "minPrice": 50 })).unwrap();

        let (criteria, _) = query.into_parts(&defaults).unwrap();

        assert_eq!(criteria.price_range, PriceRange::new(50.0, 5000.0));
        assert_eq!(criteria.min_rating, 2.0);
    }

    #[test]
    fn test_inverted_range_is_passed_through() {
        let query: FilterQuery =
            serde_json::from_value(json!({ "min_price": 100, "max_price": 50 })).unwrap();

        let (criteria, _) = query.into_parts(&FilterCriteria::default()).unwrap();
        assert!(criteria.price_range.is_inverted());
    }

    #[test]
    fn test_negative_price_rejected() {
        let query: FilterQuery = serde_json::from_value(json!({ "min_price": -1 })).unwrap();

        let err = query.into_parts(&FilterCriteria::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RANGE");
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let query: FilterQuery = serde_json::from_value(json!({ "sort": "cheapest" })).unwrap();

        assert_eq!(
            query.sort_key().unwrap_err(),
            FilterError::UnknownSortKey("cheapest".to_string())
        );
    }

    #[test]
    fn test_rating_aliases() {
        let query: FilterQuery = serde_json::from_value(json!({ "minRating": 4 })).unwrap();
        assert_eq!(query.rating, Some(4.0));
    }
}
