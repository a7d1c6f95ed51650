//! File upload surface: documents and profile pictures via pre-signed URLs.

pub mod handlers;
pub mod routes;
