//! Order Config

use clap::Args;
use vitrine::order::{DEFAULT_MESSAGING_URL, DEFAULT_STORE_NAME, OrderTemplate};

/// Order message settings.
#[derive(Debug, Clone, Args)]
pub struct OrderConfig {
    /// Store name shown in the order header
    #[arg(long, env = "VITRINE_STORE_NAME", default_value = DEFAULT_STORE_NAME)]
    pub store_name: String,

    /// Messaging link base URL
    #[arg(long, env = "VITRINE_MESSAGING_URL", default_value = DEFAULT_MESSAGING_URL)]
    pub messaging_url: String,
}

impl OrderConfig {
    /// Order template for these settings.
    pub fn template(&self) -> OrderTemplate {
        OrderTemplate::new(self.store_name.clone(), self.messaging_url.clone())
    }
}
