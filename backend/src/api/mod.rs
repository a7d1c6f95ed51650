//! Feature proxy routes.
//!
//! Each submodule mirrors one surface of the original client: thin handlers
//! that read the role cookie, forward it as a bearer token through
//! [`crate::services::CoreApi`], and re-emit the core API's response.

pub mod account;
pub mod admin;
pub mod catalogue;
pub mod companies;
pub mod notifications;
pub mod payments;
pub mod uploads;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(account::routes::router())
        .merge(admin::routes::router())
        .merge(catalogue::routes::router())
        .merge(companies::routes::router())
        .merge(notifications::routes::router())
        .merge(payments::routes::router())
        .merge(uploads::routes::router())
}
