//! Admin service.

use std::sync::Arc;

use tracing::{info, warn};
use vitrine::{
    listing::{InventoryStats, ListingQuery, Page, list},
    products::{Product, ProductId},
    session::{AuthState, Session},
    uploads::UploadTracker,
};

use crate::{
    admin::AdminServiceError,
    api::{ImageUpload, ProductsApi},
    store::{ProductStore, Refresh},
};

/// Outcome of a change the service accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    /// The listing was reloaded afterwards.
    Reloaded(Refresh),

    /// The change went through but the reload failed; the previous listing stays.
    ReloadFailed,
}

/// Admin operations over the full product listing.
///
/// Only constructible from a signed-in [`AuthState`].
#[derive(Clone)]
pub struct AdminService {
    api: Arc<dyn ProductsApi>,
    session: Session,
    store: Arc<ProductStore>,
    uploads: UploadTracker,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService")
            .field("session", &self.session)
            .field("store", &self.store)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}

impl AdminService {
    /// Open the admin surface for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AdminServiceError::AccessDenied`] when signed out.
    pub fn new(api: Arc<dyn ProductsApi>, auth: &AuthState) -> Result<Self, AdminServiceError> {
        let session = auth.guard()?.clone();

        Ok(Self {
            api,
            session,
            store: Arc::new(ProductStore::new()),
            uploads: UploadTracker::new(),
        })
    }

    /// Signed-in user
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch every parent product, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails; the previous listing is kept.
    pub async fn refresh(&self) -> Result<Refresh, AdminServiceError> {
        let ticket = self.store.begin();
        let result = self.api.list_parent_products().await;

        Ok(self.store.apply(ticket, result, |_| true)?)
    }

    fn products(&self) -> Result<Arc<[Product]>, AdminServiceError> {
        self.store.snapshot().ok_or(AdminServiceError::NotLoaded)
    }

    /// Filter, sort and paginate the loaded listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminServiceError::NotLoaded`] before the first successful load.
    pub fn page(&self, query: &ListingQuery) -> Result<Page<Product>, AdminServiceError> {
        Ok(list(&self.products()?, query).map(Clone::clone))
    }

    /// Inventory statistics over the whole loaded listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminServiceError::NotLoaded`] before the first successful load.
    pub fn stats(&self) -> Result<InventoryStats, AdminServiceError> {
        Ok(InventoryStats::from_products(&self.products()?))
    }

    /// Flip a product's active flag on the service, then locally.
    ///
    /// The local flag only changes once the service confirmed the toggle.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown product or a failed request.
    pub async fn toggle_active(&self, id: &ProductId) -> Result<Product, AdminServiceError> {
        let was_active = self
            .products()?
            .iter()
            .find(|product| &product.id == id)
            .map(|product| product.active)
            .ok_or_else(|| AdminServiceError::UnknownProduct(id.clone()))?;

        if let Err(error) = self.api.toggle_active(id).await {
            warn!(product_id = %id, %error, "status toggle failed");
            return Err(error.into());
        }

        let product = self
            .store
            .update(id, |product| product.active = !was_active)
            .ok_or_else(|| AdminServiceError::UnknownProduct(id.clone()))?;

        info!(product_id = %id, active = product.active, user = self.session.username(), "toggled product");

        Ok(product)
    }

    async fn reload(&self) -> Committed {
        match self.refresh().await {
            Ok(refresh) => Committed::Reloaded(refresh),
            Err(error) => {
                warn!(%error, "reload after change failed");
                Committed::ReloadFailed
            }
        }
    }

    /// Upload a product image, then reload the listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminServiceError::UploadInProgress`] when the product
    /// already has an upload in flight, or the upload request error.
    pub async fn upload_image(
        &self,
        id: &ProductId,
        image: ImageUpload,
    ) -> Result<Committed, AdminServiceError> {
        let _guard = self
            .uploads
            .begin(id)
            .ok_or_else(|| AdminServiceError::UploadInProgress(id.clone()))?;

        self.api.upload_image(id, image).await?;

        info!(product_id = %id, user = self.session.username(), "uploaded product image");

        Ok(self.reload().await)
    }

    /// Whether an upload is in flight for the product.
    pub fn is_uploading(&self, id: &ProductId) -> bool {
        self.uploads.is_uploading(id)
    }

    /// Start a re-synchronisation job, then reload the listing.
    ///
    /// # Errors
    ///
    /// Returns an error when the sync request fails.
    pub async fn start_sync(&self) -> Result<Committed, AdminServiceError> {
        self.api.trigger_sync().await?;

        info!(user = self.session.username(), "product sync started");

        Ok(self.reload().await)
    }

    /// Public URL of a product's image.
    pub fn image_url(&self, product: &Product) -> Option<String> {
        self.api.image_url(product)
    }
}
