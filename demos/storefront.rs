//! Storefront example: load a catalog, then narrow and re-sort it

use catalog::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🛒 catalog-rs Storefront Example\n");

    let source = InMemoryCatalogSource::with_products(vec![
        Product::new(1, "Trail Runner", "Shoes", "Acme", 89.0, 4.5),
        Product::new(2, "City Loafer", "Shoes", "Brio", 120.0, 3.9),
        Product::new(3, "Day Pack", "Bags", "Acme", 45.0, 4.8),
        Product::new(4, "Tote", "Bags", "Brio", 45.0, 4.1),
        Product::new(5, "Sandal", "Shoes", "Acme", 35.0, 2.5),
        Product::new(6, "Duffel", "Bags", "Coda", 210.0, 4.8),
    ]);

    let config = CatalogConfig::default_config();
    let mut session = CatalogSession::with_config(source, &config);
    session.reload().await?;

    println!("Categories: {}", session.categories().join(", "));
    println!("Brands:     {}", session.brands().join(", "));
    let sort_options: Vec<String> = SortKey::ALL
        .iter()
        .map(|key| format!("{} [{}]", key.label(), key.as_str()))
        .collect();
    println!("Sort by:    {}\n", sort_options.join(", "));
    show("All products", &session);

    session.update_criteria(|c| c.category = "Shoes".to_string())?;
    session.set_sort_key(SortKey::PriceAsc);
    show("Shoes, price low to high", &session);

    session.update_criteria(|c| {
        c.category.clear();
        c.min_rating = 4.0;
    })?;
    session.set_sort_key(SortKey::RatingDesc);
    show("4 stars & up, best rated first", &session);

    if let Err(e) = session.update_criteria(|c| c.price_range = PriceRange::new(-10.0, 50.0)) {
        println!("❌ Rejected: {} ({})\n", e, e.error_code());
    }

    session.update_criteria(|c| c.price_range = PriceRange::new(100.0, 50.0))?;
    show("Inverted price range", &session);

    session.reset_filters();
    show("After reset", &session);

    Ok(())
}

fn show(title: &str, session: &CatalogSession) {
    println!("📋 {}", title);
    let visible = session.visible();
    if visible.is_empty() {
        println!("   No products found");
    }
    for p in visible {
        println!(
            "   {:<14} {:>7.2} $  {:<6} {:<5} ★ {}",
            p.name, p.price, p.category, p.brand, p.rating
        );
    }
    println!();
}
