//! Core `adapters` crate for talking to the Thamer platform's external
//! collaborators.
//!
//! This crate holds the typed client for the Thamer core REST API (the
//! single chokepoint every gateway handler goes through) and the
//! pre-signed-URL file upload flow against object storage. It knows nothing
//! about cookies, sessions, or routing; callers supply a bearer token per
//! request.

pub mod api;
pub mod errors;
pub mod models;
pub mod storage;

pub use api::ApiClient;
pub use errors::{ApiError, UploadError};
pub use storage::{UploadFile, UploadKind, UploadOutcomeError, Uploader};
