//! Authentication module: role-scoped session cookies and the token gate.
//!
//! This module owns everything between the browser and a bearer token: the
//! cookie-backed token store endpoints, the per-request gate middleware,
//! and the decode-only freshness check applied to stored JWTs.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

pub use errors::AuthError;
pub use models::{Claims, TokenRole};
