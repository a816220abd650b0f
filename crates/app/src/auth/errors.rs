//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,

    #[error("admin credentials are not configured")]
    MissingCredentials,

    #[error("configured password digest is not a SHA-256 hex string")]
    InvalidDigest,
}
