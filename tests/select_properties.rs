//! Property tests for select: identity, predicate soundness, idempotence, stability

use catalog::prelude::*;
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["A", "B", "C"];
const BRANDS: [&str; 3] = ["X", "Y", "Z"];

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    // Coarse prices and ratings so ties are frequent
    prop::collection::vec((0usize..3, 0usize..3, 0u32..50, 0u32..=10), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (c, b, price, rating))| {
                Product::new(
                    i as i64,
                    format!("p{}", i),
                    CATEGORIES[c],
                    BRANDS[b],
                    f64::from(price) * 10.0,
                    f64::from(rating) / 2.0,
                )
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(0usize..3),
        prop::option::of(0usize..3),
        0u32..600,
        0u32..600,
        0u32..=10,
    )
        .prop_map(|(c, b, lo, hi, rating)| FilterCriteria {
            category: c.map(|i| CATEGORIES[i].to_string()).unwrap_or_default(),
            brand: b.map(|i| BRANDS[i].to_string()).unwrap_or_default(),
            price_range: PriceRange::new(f64::from(lo), f64::from(hi)),
            min_rating: f64::from(rating) / 2.0,
        })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn satisfies(criteria: &FilterCriteria, p: &Product) -> bool {
    (criteria.category.is_empty() || p.category == criteria.category)
        && (criteria.brand.is_empty() || p.brand == criteria.brand)
        && criteria.price_range.min <= p.price
        && p.price <= criteria.price_range.max
        && p.rating >= criteria.min_rating
}

proptest! {
    #[test]
    fn prop_default_unsorted_is_identity(products in arb_catalog()) {
        let result = select(&products, &FilterCriteria::default(), SortKey::None).unwrap();
        prop_assert_eq!(result, products);
    }

    #[test]
    fn prop_selection_is_exactly_the_matching_set(
        products in arb_catalog(),
        criteria in arb_criteria(),
        sort in arb_sort_key(),
    ) {
        let result = select(&products, &criteria, sort).unwrap();

        prop_assert!(result.iter().all(|p| satisfies(&criteria, p)));

        let expected = products.iter().filter(|p| satisfies(&criteria, p)).count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn prop_select_is_idempotent(
        products in arb_catalog(),
        criteria in arb_criteria(),
        sort in arb_sort_key(),
    ) {
        let once = select(&products, &criteria, sort).unwrap();
        let twice = select(&once, &criteria, sort).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sorted_orders_are_stable(
        products in arb_catalog(),
        criteria in arb_criteria(),
        sort in arb_sort_key(),
    ) {
        let filtered = select(&products, &criteria, SortKey::None).unwrap();
        let sorted = select(&products, &criteria, sort).unwrap();

        // Ids are assigned in input order, so among equal keys they must ascend
        let id = |p: &Product| match p.id {
            ProductId::Number(n) => n,
            ProductId::Text(_) => unreachable!(),
        };
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match sort {
                SortKey::PriceAsc => {
                    prop_assert!(a.price <= b.price);
                    if a.price == b.price { prop_assert!(id(a) < id(b)); }
                }
                SortKey::PriceDesc => {
                    prop_assert!(a.price >= b.price);
                    if a.price == b.price { prop_assert!(id(a) < id(b)); }
                }
                SortKey::RatingDesc => {
                    prop_assert!(a.rating >= b.rating);
                    if a.rating == b.rating { prop_assert!(id(a) < id(b)); }
                }
                SortKey::None | SortKey::Popularity => {}
            }
        }

        if !sort.reorders() {
            prop_assert_eq!(sorted, filtered);
        }
    }

    #[test]
    fn prop_facets_are_distinct_and_complete(products in arb_catalog()) {
        let categories = distinct_categories(&products);
        let brands = distinct_brands(&products);

        for (i, c) in categories.iter().enumerate() {
            prop_assert!(!categories[..i].contains(c));
        }
        for (i, b) in brands.iter().enumerate() {
            prop_assert!(!brands[..i].contains(b));
        }
        prop_assert!(products.iter().all(|p| categories.contains(&p.category)));
        prop_assert!(products.iter().all(|p| brands.contains(&p.brand)));

        // Facets list values in the order they first appear in the catalog
        let mut first_categories: Vec<String> = Vec::new();
        let mut first_brands: Vec<String> = Vec::new();
        for p in &products {
            if !first_categories.contains(&p.category) {
                first_categories.push(p.category.clone());
            }
            if !first_brands.contains(&p.brand) {
                first_brands.push(p.brand.clone());
            }
        }
        prop_assert_eq!(categories, first_categories);
        prop_assert_eq!(brands, first_brands);
    }
}
