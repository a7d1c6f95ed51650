//! Custom error types specific to the `adapters` crate.
//!
//! The taxonomy is deliberately small and tagged: callers pattern-match on
//! the variant instead of probing response shapes. A backend that answered
//! with a structured `detail` string is a different failure from a transport
//! that never produced a usable body.

use thiserror::Error;

/// Errors produced by [`crate::ApiClient`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The core API answered with a structured error body (`{"detail": ...}`).
    /// The detail string is surfaced verbatim to the end user.
    #[error("{detail}")]
    Backend { detail: String },

    /// Transport failure, unusable response body, or any other error that
    /// carries no backend-authored message.
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: err.to_string(),
        }
    }
}

/// Client-side rejection of a file before any network call is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("unsupported content type: {content_type}")]
    UnsupportedType { content_type: String },

    #[error("file name is required")]
    MissingName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_detail_verbatim() {
        let err = ApiError::Backend {
            detail: "Company already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Company already registered");
    }

    #[test]
    fn network_error_displays_message() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn upload_error_display() {
        let err = UploadError::TooLarge { size: 11, limit: 10 };
        assert_eq!(err.to_string(), "file too large: 11 bytes (limit 10)");
        let err = UploadError::UnsupportedType {
            content_type: "text/html".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported content type: text/html");
    }
}
