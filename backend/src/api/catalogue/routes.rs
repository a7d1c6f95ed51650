//! Route table for the catalogue surface.

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies-with-scores", get(handlers::search))
        .route("/user/subscription", get(handlers::user_subscription))
}
