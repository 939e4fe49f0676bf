//! Facet derivation: the selectable values of a filterable dimension

use crate::core::Product;
use indexmap::IndexSet;

/// Distinct values of `key` across `products`, in first-seen order
pub fn distinct_by<'a, F>(products: &'a [Product], key: F) -> Vec<String>
where
    F: Fn(&'a Product) -> &'a str,
{
    products
        .iter()
        .map(key)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct categories, each once, in the order they first appear
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    distinct_by(products, |p| p.category.as_str())
}

/// Distinct brands, each once, in the order they first appear
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    distinct_by(products, |p| p.brand.as_str())
}
