//! Admin Credentials Config

use clap::Args;

use crate::auth::{AuthError, ConfiguredAuthenticator};

/// Credentials the admin surface accepts.
#[derive(Debug, Clone, Args)]
pub struct AdminCredentialsConfig {
    /// Admin username
    #[arg(long, env = "VITRINE_ADMIN_USERNAME")]
    pub admin_username: Option<String>,

    /// Hex SHA-256 digest of the admin password
    #[arg(long, env = "VITRINE_ADMIN_PASSWORD_SHA256", hide_env_values = true)]
    pub admin_password_sha256: Option<String>,
}

impl AdminCredentialsConfig {
    /// Build the authenticator for these credentials.
    ///
    /// # Errors
    ///
    /// Returns an error when credentials are missing or malformed.
    pub fn authenticator(&self) -> Result<ConfiguredAuthenticator, AuthError> {
        ConfiguredAuthenticator::new(
            self.admin_username.clone(),
            self.admin_password_sha256.clone(),
        )
    }
}
