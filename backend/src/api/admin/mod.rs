//! Admin moderation surface: companies, users, platform stats.

pub mod handlers;
pub mod routes;
