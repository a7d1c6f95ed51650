//! Route table for the notifications surface.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::list))
        .route("/notifications/mark-read", post(handlers::mark_read))
        .route("/notifications/:id", get(handlers::detail))
}
