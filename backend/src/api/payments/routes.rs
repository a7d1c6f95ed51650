//! Route table for the payment surface.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payment/initiate", post(handlers::initiate))
        .route("/payment/status/:order_id", get(handlers::status))
}
