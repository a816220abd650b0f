//! Auth service.

use mockall::automock;
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use vitrine::session::{AuthState, Session};
use zeroize::Zeroizing;

use crate::auth::AuthError;

/// Checks credentials against a username and a SHA-256 password digest
/// supplied by configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredAuthenticator {
    username: String,
    password_sha256: Zeroizing<String>,
}

impl ConfiguredAuthenticator {
    /// Build an authenticator from configured credentials.
    ///
    /// # Errors
    ///
    /// Returns an error when either value is missing or the digest isn't a
    /// 64 character hex string.
    pub fn new(
        username: Option<String>,
        password_sha256: Option<String>,
    ) -> Result<Self, AuthError> {
        let (Some(username), Some(digest)) = (username, password_sha256) else {
            return Err(AuthError::MissingCredentials);
        };

        let digest = Zeroizing::new(digest.trim().to_ascii_lowercase());

        if digest.len() != 64 || !digest.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(AuthError::InvalidDigest);
        }

        Ok(Self {
            username,
            password_sha256: digest,
        })
    }
}

/// Lowercase hex SHA-256 digest of a password.
pub fn password_digest(password: &str) -> Zeroizing<String> {
    Zeroizing::new(format!("{:x}", Sha256::digest(password.as_bytes())))
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .fold(0_u8, |diff, (l, r)| diff | (l ^ r))
            == 0
}

impl Authenticator for ConfiguredAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let digest = password_digest(password);

        let username_matches = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let password_matches =
            constant_time_eq(digest.as_bytes(), self.password_sha256.as_bytes());

        if username_matches && password_matches {
            Ok(Session::new(username))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Authenticate and store the session.
///
/// A failed attempt leaves the state untouched.
///
/// # Errors
///
/// Returns the authenticator's error when the credentials are rejected.
pub fn sign_in(
    authenticator: &dyn Authenticator,
    state: &mut AuthState,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    match authenticator.authenticate(username, password) {
        Ok(session) => {
            info!(username = session.username(), "admin signed in");
            state.login(session);
            Ok(())
        }
        Err(error) => {
            warn!(username, %error, "admin sign-in rejected");
            Err(error)
        }
    }
}

#[automock]
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn authenticator() -> Result<ConfiguredAuthenticator, AuthError> {
        ConfiguredAuthenticator::new(
            Some("admin".to_string()),
            Some(password_digest("segredo").to_string()),
        )
    }

    #[test]
    fn password_digest_is_lowercase_hex() {
        assert_eq!(
            password_digest("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn accepts_configured_credentials() -> TestResult {
        let session = authenticator()?.authenticate("admin", "segredo")?;

        assert_eq!(session.username(), "admin");

        Ok(())
    }

    #[test]
    fn rejects_wrong_password_or_username() -> TestResult {
        let authenticator = authenticator()?;

        assert_eq!(
            authenticator.authenticate("admin", "errada"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticator.authenticate("root", "segredo"),
            Err(AuthError::InvalidCredentials)
        );

        Ok(())
    }

    #[test]
    fn uppercase_digest_is_accepted() -> TestResult {
        let digest = password_digest("segredo").to_uppercase();
        let authenticator = ConfiguredAuthenticator::new(Some("admin".to_string()), Some(digest))?;

        assert!(authenticator.authenticate("admin", "segredo").is_ok());

        Ok(())
    }

    #[test]
    fn missing_or_malformed_configuration() {
        assert!(matches!(
            ConfiguredAuthenticator::new(None, Some("00".repeat(32))),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            ConfiguredAuthenticator::new(Some("admin".to_string()), Some("segredo".to_string())),
            Err(AuthError::InvalidDigest)
        ));
    }

    #[test]
    fn sign_in_stores_session_only_on_success() {
        let mut authenticator = MockAuthenticator::new();

        authenticator
            .expect_authenticate()
            .withf(|username, password| username == "admin" && password == "certa")
            .returning(|username, _| Ok(Session::new(username)));

        authenticator
            .expect_authenticate()
            .returning(|_, _| Err(AuthError::InvalidCredentials));

        let mut state = AuthState::new();

        assert_eq!(
            sign_in(&authenticator, &mut state, "admin", "errada"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!state.is_authenticated());

        assert_eq!(sign_in(&authenticator, &mut state, "admin", "certa"), Ok(()));
        assert_eq!(state.username(), Some("admin"));
    }
}
