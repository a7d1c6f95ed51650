//! Error types for token handling.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No cookie is present for the required role.
    #[error("missing session token")]
    MissingToken,

    /// The token could not be decoded as a JWT payload at all.
    #[error("malformed session token: {0}")]
    Malformed(String),
}
