//! Configuration
//!
//! Every setting can come from a flag or an environment variable; a `.env`
//! file is read first when present.

pub mod api;
pub mod auth;
pub mod observability;
pub mod order;

pub use api::ApiConfig;
pub use auth::AdminCredentialsConfig;
pub use observability::{LogFormat, LoggingConfig};
pub use order::OrderConfig;
