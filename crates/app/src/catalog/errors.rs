//! Catalog service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("Erro ao carregar produtos")]
    Api(#[from] ApiError),

    #[error("catalog has not been loaded")]
    NotLoaded,
}
