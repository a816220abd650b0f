//! Product Service Config

use std::time::Duration;

use clap::Args;

use crate::api::ProductsApiConfig;

/// Product service connection settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Product service base URL
    #[arg(long, env = "VITRINE_API_URL", default_value = "http://localhost:54863")]
    pub api_url: String,

    /// Base URL product images are served from; defaults to `<api url>/uploads`
    #[arg(long, env = "VITRINE_UPLOADS_URL")]
    pub uploads_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "VITRINE_HTTP_TIMEOUT_SECONDS", default_value_t = 30u64)]
    pub http_timeout_seconds: u64,
}

impl ApiConfig {
    /// Client configuration for the product service.
    pub fn client_config(&self) -> ProductsApiConfig {
        let config = ProductsApiConfig::new(
            self.api_url.clone(),
            Duration::from_secs(self.http_timeout_seconds),
        );

        match &self.uploads_url {
            Some(uploads_url) => config.with_uploads_url(uploads_url.clone()),
            None => config,
        }
    }
}
