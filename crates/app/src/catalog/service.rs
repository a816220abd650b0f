//! Catalog service.

use std::sync::Arc;

use tracing::info;
use vitrine::{
    listing::{ListingQuery, Page, list},
    products::{Product, ProductId},
};

use crate::{
    api::ProductsApi,
    catalog::CatalogServiceError,
    store::{ProductStore, Refresh},
};

/// Shopper-facing catalog: active parent products and their variations.
#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn ProductsApi>,
    store: Arc<ProductStore>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Create a catalog over the given product service.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>) -> Self {
        Self {
            api,
            store: Arc::new(ProductStore::new()),
        }
    }

    /// Fetch the parent products, keeping the active ones.
    ///
    /// Also serves as the retry after a failed load.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails; the previous listing is kept.
    pub async fn refresh(&self) -> Result<Refresh, CatalogServiceError> {
        let ticket = self.store.begin();
        let result = self.api.list_parent_products().await;
        let refresh = self.store.apply(ticket, result, |product| product.active)?;

        if let Refresh::Applied(count) = refresh {
            info!(count, "catalog loaded");
        }

        Ok(refresh)
    }

    /// Whether a listing is available.
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Search, sort and paginate the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::NotLoaded`] before the first successful load.
    pub fn page(&self, search: &str, page: usize) -> Result<Page<Product>, CatalogServiceError> {
        let products = self.store.snapshot().ok_or(CatalogServiceError::NotLoaded)?;

        Ok(list(&products, &ListingQuery::catalog(search, page)).map(Clone::clone))
    }

    /// Active variations of a parent product.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails.
    pub async fn variations(&self, parent: &ProductId) -> Result<Vec<Product>, CatalogServiceError> {
        let mut variations = self.api.list_variations(parent).await?;

        variations.retain(|variation| variation.active);

        Ok(variations)
    }

    /// Public URL of a product's image.
    pub fn image_url(&self, product: &Product) -> Option<String> {
        self.api.image_url(product)
    }
}
