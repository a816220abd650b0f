//! Fetched product cache.
//!
//! Each listing keeps the last successful fetch. A fetch that finishes after
//! a newer one started is dropped; a failed fetch keeps the previous listing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use vitrine::{
    generation::{RequestGeneration, Ticket},
    products::{Product, ProductId},
};

use crate::api::ApiError;

type Snapshot = Option<Arc<[Product]>>;

/// Outcome of applying a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The listing was replaced; carries the number of products kept.
    Applied(usize),

    /// A newer fetch started meanwhile; the result was discarded.
    Stale,
}

/// Product cache guarded by a request generation counter.
#[derive(Debug, Default)]
pub struct ProductStore {
    generation: RequestGeneration,
    products: Mutex<Snapshot>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fetch.
    pub fn begin(&self) -> Ticket {
        self.generation.begin()
    }

    /// Apply a fetch result, keeping only products that pass `keep`.
    ///
    /// # Errors
    ///
    /// Returns the fetch error of a current ticket; the previous listing stays.
    pub fn apply(
        &self,
        ticket: Ticket,
        result: Result<Vec<Product>, ApiError>,
        keep: impl Fn(&Product) -> bool,
    ) -> Result<Refresh, ApiError> {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, "discarding stale product listing");
            return Ok(Refresh::Stale);
        }

        let products: Arc<[Product]> = result?.into_iter().filter(|product| keep(product)).collect();
        let count = products.len();

        *self.lock() = Some(products);

        Ok(Refresh::Applied(count))
    }

    /// Current listing, if any fetch has succeeded.
    pub fn snapshot(&self) -> Option<Arc<[Product]>> {
        self.lock().clone()
    }

    /// Whether a listing is available.
    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    /// Apply `update` to the cached product with the given id.
    ///
    /// Returns the updated product, or `None` when it isn't cached.
    pub fn update(&self, id: &ProductId, update: impl FnOnce(&mut Product)) -> Option<Product> {
        let mut guard = self.lock();
        let current = guard.as_ref()?;
        let mut products = current.to_vec();
        let product = products.iter_mut().find(|product| &product.id == id)?;

        update(product);

        let updated = product.clone();

        *guard = Some(products.into());

        Some(updated)
    }
}
