//! Integration tests for the filter/sort engine

use catalog::prelude::*;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Trail Runner", "Shoes", "Acme", 89.0, 4.5),
        Product::new(2, "City Loafer", "Shoes", "Brio", 120.0, 3.9),
        Product::new(3, "Day Pack", "Bags", "Acme", 45.0, 4.8),
        Product::new(4, "Tote", "Bags", "Brio", 45.0, 4.1),
        Product::new(5, "Sandal", "Shoes", "Acme", 45.0, 2.5),
        Product::new(6, "Duffel", "Bags", "Coda", 210.0, 4.8),
    ]
}

fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_default_criteria_unsorted_is_identity() {
    let products = catalog();
    let result = select(&products, &FilterCriteria::default(), SortKey::None).unwrap();
    assert_eq!(result, products);
}

#[test]
fn test_popularity_keeps_filtered_order() {
    let products = catalog();
    let criteria = FilterCriteria::default().with_category("Bags");

    let result = select(&products, &criteria, SortKey::Popularity).unwrap();
    assert_eq!(ids(&result), ["3", "4", "6"]);
}

#[test]
fn test_price_low_high_ties_keep_input_order() {
    let result = select(&catalog(), &FilterCriteria::default(), SortKey::PriceAsc).unwrap();
    assert_eq!(ids(&result), ["3", "4", "5", "1", "2", "6"]);
}

#[test]
fn test_price_high_low_ties_keep_input_order() {
    let result = select(&catalog(), &FilterCriteria::default(), SortKey::PriceDesc).unwrap();
    assert_eq!(ids(&result), ["6", "2", "1", "3", "4", "5"]);
}

#[test]
fn test_rating_high_low_ties_keep_input_order() {
    let result = select(&catalog(), &FilterCriteria::default(), SortKey::RatingDesc).unwrap();
    assert_eq!(ids(&result), ["3", "6", "1", "4", "2", "5"]);
}

#[test]
fn test_all_four_facets_combined() {
    let criteria = FilterCriteria::default()
        .with_category("Bags")
        .with_brand("Brio")
        .with_price_range(PriceRange::new(40.0, 50.0))
        .with_min_rating(4.0);

    let result = select(&catalog(), &criteria, SortKey::None).unwrap();
    assert_eq!(ids(&result), ["4"]);
}

#[test]
fn test_narrow_price_range_is_inclusive() {
    let criteria = FilterCriteria::default().with_price_range(PriceRange::new(45.0, 45.0));

    let result = select(&catalog(), &criteria, SortKey::None).unwrap();
    assert_eq!(ids(&result), ["3", "4", "5"]);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let criteria = FilterCriteria::default().with_brand("Nobody");
    assert!(select(&catalog(), &criteria, SortKey::PriceAsc).unwrap().is_empty());
}

#[test]
fn test_inverted_range_is_empty() {
    let criteria = FilterCriteria::default().with_price_range(PriceRange::new(100.0, 50.0));
    assert!(select(&catalog(), &criteria, SortKey::None).unwrap().is_empty());
}

#[test]
fn test_invalid_range_rejected() {
    let criteria = FilterCriteria::default().with_price_range(PriceRange::new(0.0, -1.0));

    let err = select(&catalog(), &criteria, SortKey::None).unwrap_err();
    assert_eq!(err, FilterError::InvalidRange { min: 0.0, max: -1.0 });
}

#[test]
fn test_reapplying_is_a_no_op() {
    let criteria = FilterCriteria::default()
        .with_category("Shoes")
        .with_min_rating(3.0);

    let once = select(&catalog(), &criteria, SortKey::PriceDesc).unwrap();
    let twice = select(&once, &criteria, SortKey::PriceDesc).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_facets_ignore_criteria() {
    let products = catalog();
    assert_eq!(distinct_categories(&products), ["Shoes", "Bags"]);
    assert_eq!(distinct_brands(&products), ["Acme", "Brio", "Coda"]);
}

#[test]
fn test_worked_example_from_feed_json() {
    let products = decode_products(
        "fixture",
        serde_json::json!([
            {"id": 1, "name": "ten", "category": "A", "brand": "X", "price": 10, "rating": 4, "imageUrl": ""},
            {"id": 2, "name": "five", "category": "B", "brand": "Y", "price": 5, "rating": 5, "imageUrl": ""}
        ]),
    )
    .unwrap();

    let criteria: FilterCriteria = serde_json::from_value(serde_json::json!({
        "category": "",
        "brand": "",
        "priceRange": [0, 5000],
        "rating": 0
    }))
    .unwrap();
    let sort: SortKey = serde_json::from_value(serde_json::json!("price-low-high")).unwrap();

    let result = select(&products, &criteria, sort).unwrap();
    assert_eq!(ids(&result), ["2", "1"]);

    let only_a = select(&products, &criteria.clone().with_category("A"), SortKey::None).unwrap();
    assert_eq!(ids(&only_a), ["1"]);
}
