//! Routes for the cookie-backed token store.
//!
//! These live under `/api` on purpose: the token gate excludes `/api/*`, so
//! the store itself is reachable without a session.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_cookie, logout, set_cookie};
use crate::AppState;

pub fn session_router() -> Router<AppState> {
    Router::new()
        .route("/api/get-cookie", get(get_cookie))
        .route("/api/set-cookie", post(set_cookie))
        .route("/api/logout", post(logout))
}
