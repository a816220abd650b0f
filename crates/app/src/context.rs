//! App Context

use std::sync::Arc;

use thiserror::Error;
use vitrine::session::AuthState;

use crate::{
    admin::{AdminService, AdminServiceError},
    api::{ApiError, HttpProductsApi, ProductsApi},
    auth::{AuthError, Authenticator, sign_in},
    catalog::CatalogService,
    config::ApiConfig,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build product service client")]
    Client(#[source] ApiError),
}

#[derive(Debug, Error)]
pub enum SignInError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Admin(#[from] AdminServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsApi>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from the product service settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let api = HttpProductsApi::new(config.client_config()).map_err(AppInitError::Client)?;

        Ok(Self::new(Arc::new(api)))
    }

    #[must_use]
    pub fn new(products: Arc<dyn ProductsApi>) -> Self {
        Self { products }
    }

    /// Shopper catalog.
    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.products))
    }

    /// Sign in and open the admin surface.
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are rejected.
    pub fn admin(
        &self,
        authenticator: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> Result<AdminService, SignInError> {
        let mut auth = AuthState::new();

        sign_in(authenticator, &mut auth, username, password)?;

        Ok(AdminService::new(Arc::clone(&self.products), &auth)?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use vitrine::session::Session;

    use super::*;
    use crate::{api::MockProductsApi, auth::MockAuthenticator};

    #[test]
    fn admin_requires_accepted_credentials() -> TestResult {
        let context = AppContext::new(Arc::new(MockProductsApi::new()));
        let mut authenticator = MockAuthenticator::new();

        authenticator
            .expect_authenticate()
            .returning(|username, password| {
                if password == "certa" {
                    Ok(Session::new(username))
                } else {
                    Err(AuthError::InvalidCredentials)
                }
            });

        let rejected = context.admin(&authenticator, "admin", "errada");

        assert!(matches!(
            rejected,
            Err(SignInError::Auth(AuthError::InvalidCredentials))
        ));

        let admin = context.admin(&authenticator, "admin", "certa")?;

        assert_eq!(admin.session().username(), "admin");

        Ok(())
    }
}
