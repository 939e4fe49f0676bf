//! Selection: filter a product collection, then order the survivors

use crate::core::{FilterCriteria, FilterError, Product, SortKey};

/// Select the products matching `criteria`, ordered by `sort_key`
///
/// The input slice is never modified; matches are cloned into a fresh
/// vector in input order and then stable-sorted, so products that compare
/// equal under `sort_key` keep their relative input order. An empty input
/// or a filter matching nothing yields an empty vector, not an error.
///
/// # Errors
///
/// [`FilterError::InvalidRange`] when a price bound is NaN, infinite or
/// negative. An inverted range is accepted and matches nothing.
///
/// # Example
/// ```rust
/// use catalog::prelude::*;
///
/// let products = vec![
///     Product::new(1, "Lamp", "A", "X", 10.0, 4.0),
///     Product::new(2, "Desk", "B", "Y", 5.0, 5.0),
/// ];
/// let selected = select(&products, &FilterCriteria::default(), SortKey::PriceAsc).unwrap();
///
/// assert_eq!(selected[0].name, "Desk");
/// assert_eq!(selected[1].name, "Lamp");
/// ```
pub fn select(
    products: &[Product],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Result<Vec<Product>, FilterError> {
    criteria.validate()?;
    Ok(select_unchecked(products, criteria, sort_key))
}

/// [`select`] for criteria already known to be valid
pub(crate) fn select_unchecked(
    products: &[Product],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<Product> {
    let mut selected: Vec<Product> = products
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect();

    sort_key.sort(&mut selected);

    tracing::debug!(
        total = products.len(),
        selected = selected.len(),
        sort = %sort_key.as_str(),
        "Applied catalog selection"
    );

    selected
}

/// Parallel variant of [`select`]
///
/// The predicate runs on the rayon pool over read-only chunks of `products`;
/// the indexed collect keeps input order, so the stable sort that follows
/// yields exactly what [`select`] would.
#[cfg(feature = "parallel")]
pub fn select_par(
    products: &[Product],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Result<Vec<Product>, FilterError> {
    use rayon::prelude::*;

    criteria.validate()?;

    let mut selected: Vec<Product> = products
        .par_iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect();

    sort_key.sort(&mut selected);

    tracing::debug!(
        total = products.len(),
        selected = selected.len(),
        sort = %sort_key.as_str(),
        "Applied parallel catalog selection"
    );

    Ok(selected)
}
