//! Route table for the upload surface.

use axum::routing::post;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/uploads/document", post(handlers::document))
        .route("/uploads/profile-picture", post(handlers::profile_picture))
}
