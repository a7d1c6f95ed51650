//! Global application error type and its HTTP mapping.
//!
//! One place decides how the error taxonomy reaches the wire: missing or
//! stale credentials on proxy calls become 401s, backend-authored `detail`
//! strings are re-emitted verbatim (so downstream classifiers keep
//! working), transport failures become 502s, and a lapsed subscription is
//! a 402 rather than an opaque denial.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use adapters::{ApiError, UploadOutcomeError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upstream(#[from] ApiError),

    #[error("{0}")]
    BadRequest(String),

    #[error("an active subscription is required")]
    SubscriptionRequired,
}

impl From<UploadOutcomeError> for AppError {
    fn from(err: UploadOutcomeError) -> Self {
        match err {
            UploadOutcomeError::Rejected(rejected) => AppError::BadRequest(rejected.to_string()),
            UploadOutcomeError::Api(api) => AppError::Upstream(api),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": err.to_string() }),
            ),
            AppError::Upstream(ApiError::Backend { detail }) => {
                (StatusCode::BAD_REQUEST, json!({ "detail": detail }))
            }
            AppError::Upstream(ApiError::Network { message }) => {
                (StatusCode::BAD_GATEWAY, json!({ "message": message }))
            }
            AppError::BadRequest(detail) => (StatusCode::BAD_REQUEST, json!({ "detail": detail })),
            AppError::SubscriptionRequired => (
                StatusCode::PAYMENT_REQUIRED,
                json!({
                    "detail": "To access the company catalogue, you need to purchase a subscription."
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
