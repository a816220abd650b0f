//! Admin session
//!
//! Admin operations are only reachable once a session has been established.

use thiserror::Error;

/// Raised when an admin operation is attempted without a session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("admin access requires a signed-in session")]
pub struct AccessDenied;

/// Signed-in admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Create a session for a verified user.
    pub fn new(username: impl Into<String>) -> Self {
        Session {
            username: username.into(),
        }
    }

    /// Signed-in username
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Authentication state gating the admin surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    session: Option<Session>,
}

impl AuthState {
    /// Signed-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a verified session, replacing any previous one.
    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the session.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Whether a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Signed-in username, if any.
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(Session::username)
    }

    /// Return the session or refuse access.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when signed out.
    pub fn guard(&self) -> Result<&Session, AccessDenied> {
        self.session.as_ref().ok_or(AccessDenied)
    }
}
