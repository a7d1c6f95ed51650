//! Route table for the end-user company surface.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register-company", post(handlers::register_company))
        .route("/user/companies", get(handlers::list_companies))
        .route(
            "/user/companies/:id",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company),
        )
        .route("/company/:id/view", post(handlers::record_view))
        .route("/companies/:id/viewers", get(handlers::viewers))
        .route("/companies/:id/views/stats", get(handlers::view_stats))
}
