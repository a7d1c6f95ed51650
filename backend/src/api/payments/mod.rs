//! Payment surface: checkout initiation and settlement status.

pub mod handlers;
pub mod routes;
