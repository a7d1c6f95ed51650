//! Catalogue surface: scored-company search behind the subscription gate.

pub mod handlers;
pub mod routes;
