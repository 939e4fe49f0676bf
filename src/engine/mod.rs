//! The filter/sort engine
//!
//! Everything here is pure and synchronous: functions borrow the product
//! slice, never mutate it, and complete in time proportional to its length.
//! Results can be memoized on `(products identity, criteria, sort key)`.

pub mod facets;
pub mod select;

pub use facets::{distinct_brands, distinct_by, distinct_categories};
#[cfg(feature = "parallel")]
pub use select::select_par;
pub use select::select;
