//! Gateway-side services.
//!
//! `CoreApi` owns the connections to the Thamer core API and object
//! storage; `subscription` carries the one access rule evaluated on this
//! side of the wire.

pub mod core_api;
pub mod subscription;

pub use core_api::CoreApi;
