//! Core types shared by the engine, the catalog sources and the session

pub mod criteria;
pub mod error;
pub mod product;
pub mod query;
pub mod sort;

pub use criteria::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterCriteria, PriceRange};
pub use error::{CatalogError, FilterError, SourceError};
pub use product::{Product, ProductId};
pub use query::FilterQuery;
pub use sort::{Comparator, SortKey};
