//! Route table for the admin surface.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/companies", get(handlers::list_companies))
        .route("/admin/companies/:id", get(handlers::company_detail))
        .route(
            "/admin/validate-company/:id",
            post(handlers::validate_company),
        )
        .route("/admin/users", get(handlers::list_users))
        .route("/admin/users/:id", delete(handlers::deactivate_user))
        .route("/admin/users/:id/restore", post(handlers::restore_user))
        .route("/admin/stats", get(handlers::stats))
}
