//! Catalog session: the single owner of products, criteria and sort key
//!
//! A [`CatalogSession`] holds the only mutable state of a catalog view. The
//! visible products and the facet lists are recomputed from that state on
//! every call rather than cached in separate fields, so they can never drift
//! out of sync with the criteria.
//!
//! Loading is the only asynchronous step. At most one load is in flight: a
//! new [`begin_load`](CatalogSession::begin_load) aborts the previous task and
//! bumps the generation counter, and only a result carrying the current
//! generation is applied.
//!
//! # Example
//!
//! ```rust
//! use catalog::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let source = InMemoryCatalogSource::with_products(vec![
//!     Product::new(1, "Lamp", "Home", "Lumo", 20.0, 4.0),
//!     Product::new(2, "Mug", "Kitchen", "Clay", 9.0, 5.0),
//! ]);
//!
//! let mut session = CatalogSession::new(source);
//! session.reload().await.unwrap();
//!
//! session.set_sort_key(SortKey::PriceAsc);
//! let visible = session.visible();
//! assert_eq!(visible[0].name, "Mug");
//! # });
//! ```

use crate::config::CatalogConfig;
use crate::core::{FilterCriteria, FilterError, FilterQuery, Product, SortKey, SourceError};
use crate::engine::{distinct_brands, distinct_categories, select::select_unchecked};
use crate::source::CatalogSource;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Where the session stands with respect to its catalog source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been started
    Idle,

    /// A load is in flight
    Loading,

    /// The last applied load succeeded
    Ready,

    /// The last applied load failed; previously loaded products are kept
    Failed(SourceError),
}

/// What happened to a load result handed to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result replaced the session's products
    Applied { count: usize },

    /// A newer load had started; the result was dropped
    Superseded { generation: u64, current: u64 },
}

struct PendingLoad {
    generation: u64,
    handle: JoinHandle<Result<Vec<Product>, SourceError>>,
}

/// Single owner of a catalog view's state
pub struct CatalogSession {
    source: Arc<dyn CatalogSource>,
    products: Vec<Product>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    default_criteria: FilterCriteria,
    status: LoadStatus,
    generation: u64,
    pending: Option<PendingLoad>,
}

impl CatalogSession {
    /// Create a session with the default criteria and no products
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::with_defaults(source, FilterCriteria::default())
    }

    /// Create a session whose criteria start from (and reset to) the config defaults
    pub fn with_config(source: impl CatalogSource + 'static, config: &CatalogConfig) -> Self {
        Self::with_defaults(source, config.default_criteria())
    }

    fn with_defaults(source: impl CatalogSource + 'static, defaults: FilterCriteria) -> Self {
        Self {
            source: Arc::new(source),
            products: Vec::new(),
            criteria: defaults.clone(),
            sort_key: SortKey::None,
            default_criteria: defaults,
            status: LoadStatus::Idle,
            generation: 0,
            pending: None,
        }
    }

    // === Loading ===

    /// Start fetching the catalog in the background
    ///
    /// Any load still in flight is aborted; its result, should it arrive
    /// anyway, is discarded as superseded. Returns the generation of the new
    /// load, or `SourceError::Unavailable` when called outside a Tokio
    /// runtime, in which case the session is left untouched.
    pub fn begin_load(&mut self) -> Result<u64, SourceError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SourceError::unavailable(self.source.name(), e))?;

        if let Some(previous) = self.pending.take() {
            previous.handle.abort();
            tracing::debug!(
                generation = previous.generation,
                "Aborted superseded catalog load"
            );
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let handle = runtime.spawn(async move { source.fetch_products().await });

        self.pending = Some(PendingLoad { generation, handle });
        self.status = LoadStatus::Loading;

        tracing::debug!(source = self.source.name(), generation, "Started catalog load");
        Ok(generation)
    }

    /// Wait for the in-flight load and apply its result
    ///
    /// Without a load in flight this returns the current product count as
    /// an already applied outcome.
    pub async fn finish_load(&mut self) -> Result<LoadOutcome, SourceError> {
        let Some(PendingLoad { generation, handle }) = self.pending.take() else {
            return Ok(LoadOutcome::Applied {
                count: self.products.len(),
            });
        };

        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(SourceError::unavailable(self.source.name(), e)),
        };

        self.apply_load(generation, result)
    }

    /// Fetch the catalog and apply it: [`begin_load`](Self::begin_load) then
    /// [`finish_load`](Self::finish_load)
    pub async fn reload(&mut self) -> Result<LoadOutcome, SourceError> {
        self.begin_load()?;
        self.finish_load().await
    }

    /// Apply the result of the load identified by `generation`
    ///
    /// Results from any generation but the latest are dropped. A failed load
    /// is reported to the caller and leaves the previous products in place,
    /// so the session stays usable.
    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Product>, SourceError>,
    ) -> Result<LoadOutcome, SourceError> {
        if generation != self.generation {
            tracing::warn!(
                generation,
                current = self.generation,
                "Discarding superseded catalog load"
            );
            return Ok(LoadOutcome::Superseded {
                generation,
                current: self.generation,
            });
        }

        // The result arrived by another route; its task is no longer needed
        if let Some(pending) = self
            .pending
            .take_if(|p| p.generation == generation)
        {
            pending.handle.abort();
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.status = LoadStatus::Ready;
                tracing::info!(source = self.source.name(), generation, count, "Catalog loaded");
                Ok(LoadOutcome::Applied { count })
            }
            Err(e) => {
                tracing::warn!(source = self.source.name(), generation, error = %e, "Catalog load failed");
                self.status = LoadStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    // === Criteria and sort ===

    /// Replace the criteria
    ///
    /// Invalid criteria are rejected and the previous ones stay active, so
    /// the visible products are unchanged.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Result<(), FilterError> {
        if let Err(e) = criteria.validate() {
            tracing::debug!(error = %e, "Rejected filter criteria");
            return Err(e);
        }
        self.criteria = criteria;
        Ok(())
    }

    /// Edit a copy of the current criteria and apply it with [`set_criteria`](Self::set_criteria)
    pub fn update_criteria(
        &mut self,
        edit: impl FnOnce(&mut FilterCriteria),
    ) -> Result<(), FilterError> {
        let mut criteria = self.criteria.clone();
        edit(&mut criteria);
        self.set_criteria(criteria)
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Apply raw control values on top of the current criteria
    ///
    /// Fields absent from `query` keep their current value. Either both the
    /// criteria and the sort key change, or neither does.
    pub fn apply_query(&mut self, query: FilterQuery) -> Result<(), FilterError> {
        let (criteria, sort_key) = query.into_parts(&self.criteria)?;
        self.criteria = criteria;
        self.sort_key = sort_key;
        Ok(())
    }

    /// Restore the default criteria and the unsorted order
    pub fn reset_filters(&mut self) {
        self.criteria = self.default_criteria.clone();
        self.sort_key = SortKey::None;
    }

    // === Derived views ===

    /// The products to display, in display order
    pub fn visible(&self) -> Vec<Product> {
        select_unchecked(&self.products, &self.criteria, self.sort_key)
    }

    /// Category picker options
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.products)
    }

    /// Brand picker options
    pub fn brands(&self) -> Vec<String> {
        distinct_brands(&self.products)
    }

    // === Accessors ===

    /// The full, unfiltered catalog
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Generation of the most recently started load (0 before any)
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
