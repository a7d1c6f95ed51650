//! Route table for the account surface.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/admin/login", post(handlers::admin_login))
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/send-otp", post(handlers::send_otp))
        .route("/auth/verify-otp", post(handlers::verify_otp))
        .route("/auth/forgot-password", post(handlers::forgot_password))
        .route("/auth/reset-password", post(handlers::reset_password))
        .route("/me", get(handlers::me))
        .route("/update-profile", post(handlers::update_profile))
        .route(
            "/update-profile-picture",
            post(handlers::update_profile_picture),
        )
}
