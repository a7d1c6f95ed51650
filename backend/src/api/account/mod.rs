//! Account surface: login, signup, OTP, password reset, profile.

pub mod handlers;
pub mod routes;
