//! Notifications feed surface.

pub mod handlers;
pub mod routes;
