//! Admin service errors.

use thiserror::Error;
use vitrine::{products::ProductId, session::AccessDenied};

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum AdminServiceError {
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    #[error("product service error")]
    Api(#[from] ApiError),

    #[error("product listing has not been loaded")]
    NotLoaded,

    #[error("product {0} not found")]
    UnknownProduct(ProductId),

    #[error("an image upload for product {0} is already in progress")]
    UploadInProgress(ProductId),
}
