//! # catalog-rs
//!
//! Faceted filtering and sorting for product catalogs.
//!
//! ## Features
//!
//! - **Pure Engine**: [`select`](engine::select) filters by category, brand,
//!   price range and minimum rating, then orders with a stable sort
//! - **Facet Derivation**: distinct categories and brands in first-seen order
//! - **Single-Owner Session**: one [`CatalogSession`](session::CatalogSession)
//!   holds products, criteria and sort key; every view is recomputed from it
//! - **Last-Wins Loading**: at most one catalog fetch in flight, stale results dropped
//! - **Pluggable Sources**: in-memory, or any JSON feed over HTTP (`http` feature)
//! - **Configuration-Based**: source URL and filter defaults via YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog::prelude::*;
//!
//! let products = vec![
//!     Product::new(1, "Trail Runner", "Shoes", "Acme", 89.0, 4.5),
//!     Product::new(2, "City Loafer", "Shoes", "Brio", 120.0, 3.9),
//!     Product::new(3, "Day Pack", "Bags", "Acme", 45.0, 4.8),
//! ];
//!
//! let criteria = FilterCriteria::default()
//!     .with_brand("Acme")
//!     .with_min_rating(4.0);
//! let shown = select(&products, &criteria, SortKey::PriceDesc).unwrap();
//!
//! assert_eq!(shown.len(), 2);
//! assert_eq!(shown[0].name, "Trail Runner");
//! assert_eq!(distinct_brands(&products), ["Acme", "Brio"]);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod session;
pub mod source;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        CatalogError, FilterCriteria, FilterError, FilterQuery, PriceRange, Product, ProductId,
        SortKey, SourceError,
    };

    // === Engine ===
    #[cfg(feature = "parallel")]
    pub use crate::engine::select_par;
    pub use crate::engine::{distinct_brands, distinct_by, distinct_categories, select};

    // === Sources ===
    #[cfg(feature = "http")]
    pub use crate::source::HttpCatalogSource;
    pub use crate::source::{CatalogSource, InMemoryCatalogSource, decode_products};

    // === Session ===
    pub use crate::session::{CatalogSession, LoadOutcome, LoadStatus};

    // === Config ===
    pub use crate::config::{CatalogConfig, FilterDefaults, SourceConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
