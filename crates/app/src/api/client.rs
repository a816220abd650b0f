//! HTTP client for the product service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use tracing::{debug, warn};
use vitrine::{
    order::encode_component,
    products::{Product, ProductId},
};

use crate::api::{
    ApiError,
    records::{ProductRecord, ProductsEnvelope},
};

/// Configuration for connecting to the product service.
#[derive(Debug, Clone)]
pub struct ProductsApiConfig {
    /// Service base URL, e.g. `"http://localhost:54863"`.
    pub base_url: String,

    /// Base URL product images are served from.
    pub uploads_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ProductsApiConfig {
    /// Configuration with images served from `<base_url>/uploads`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            uploads_url: format!("{base_url}/uploads"),
            base_url,
            timeout,
        }
    }

    /// Override the image base URL.
    #[must_use]
    pub fn with_uploads_url(mut self, uploads_url: impl Into<String>) -> Self {
        self.uploads_url = uploads_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Image file sent to the product service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name
    pub file_name: String,

    /// MIME type, e.g. `"image/png"`
    pub content_type: Option<String>,

    /// File contents
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Guess the MIME type from the file extension.
    pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
        let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();

        match extension.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            _ => None,
        }
    }
}

/// HTTP client for the product service.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    config: ProductsApiConfig,
    http: Client,
}

impl HttpProductsApi {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProductsApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Client configuration.
    pub fn config(&self) -> &ProductsApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/produto/{path}", self.config.base_url)
    }

    async fn fetch_products(
        &self,
        url: &str,
        parent: Option<&ProductId>,
    ) -> Result<Vec<Product>, ApiError> {
        let response = ensure_success(self.http.get(url).send().await?, "list").await?;
        let envelope: ProductsEnvelope = response.json().await?;

        Ok(decode_products(envelope, parent))
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(ApiError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}

/// Decode every well-formed record, skipping and logging the rest.
pub fn decode_products(envelope: ProductsEnvelope, parent: Option<&ProductId>) -> Vec<Product> {
    envelope
        .produtos
        .into_iter()
        .filter_map(|value| {
            let record = match serde_json::from_value::<ProductRecord>(value) {
                Ok(record) => record,
                Err(error) => {
                    warn!(%error, "skipping malformed product record");
                    return None;
                }
            };

            let id = record.id.clone();

            record
                .into_product(parent)
                .inspect_err(|error| warn!(product_id = %id, %error, "skipping invalid product"))
                .ok()
        })
        .collect()
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn list_parent_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self
            .fetch_products(&self.url("findAllByProdutiPai"), None)
            .await?;

        debug!(count = products.len(), "fetched parent products");

        Ok(products)
    }

    async fn list_variations(&self, parent: &ProductId) -> Result<Vec<Product>, ApiError> {
        let url = self.url(&format!(
            "findAllVariacoes/{}",
            encode_component(parent.as_str())
        ));

        let variations = self.fetch_products(&url, Some(parent)).await?;

        debug!(parent_id = %parent, count = variations.len(), "fetched variations");

        Ok(variations)
    }

    async fn trigger_sync(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.url("getProdutosAPI")).send().await?;

        ensure_success(response, "sync").await?;

        Ok(())
    }

    async fn upload_image(&self, product: &ProductId, image: ImageUpload) -> Result<(), ApiError> {
        let url = self.url(&format!("updateFoto/{}", encode_component(product.as_str())));

        let mut part = Part::bytes(image.bytes).file_name(image.file_name);

        if let Some(content_type) = image.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|_error| ApiError::InvalidContentType(content_type.clone()))?;
        }

        let form = Form::new().part("imagem", part);
        let response = self.http.put(url).multipart(form).send().await?;

        ensure_success(response, "image upload").await?;

        Ok(())
    }

    async fn toggle_active(&self, product: &ProductId) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "changeAtivo/{}",
            encode_component(product.as_str())
        ));

        let response = self.http.put(url).send().await?;

        ensure_success(response, "status toggle").await?;

        Ok(())
    }

    fn image_url(&self, product: &Product) -> Option<String> {
        product.image_url(&self.config.uploads_url)
    }
}

/// Product service operations.
#[automock]
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// Parent products, without variations.
    async fn list_parent_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Variations of a parent product.
    async fn list_variations(&self, parent: &ProductId) -> Result<Vec<Product>, ApiError>;

    /// Start a re-synchronisation job on the service.
    async fn trigger_sync(&self) -> Result<(), ApiError>;

    /// Replace a product's image.
    async fn upload_image(&self, product: &ProductId, image: ImageUpload) -> Result<(), ApiError>;

    /// Flip a product's active flag.
    async fn toggle_active(&self, product: &ProductId) -> Result<(), ApiError>;

    /// Public URL of a product's image.
    fn image_url(&self, product: &Product) -> Option<String>;
}
