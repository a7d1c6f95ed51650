//! End-user company surface: registration, CRUD, views and viewers.

pub mod handlers;
pub mod routes;
