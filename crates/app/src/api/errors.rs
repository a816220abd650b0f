//! Product service API errors.

use thiserror::Error;

/// Errors that can occur when communicating with the product service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The product service returned a non-2xx response.
    #[error("unexpected response from product service: {0}")]
    UnexpectedResponse(String),

    /// The image to upload has an invalid content type.
    #[error("invalid image content type: {0}")]
    InvalidContentType(String),
}
