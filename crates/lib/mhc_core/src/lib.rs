//! # mhc_core
//!
//! Core domain logic for the mental health companion: the read-only
//! resource catalog, its seed data, and the simulated chat partner.

pub mod cards;
pub mod catalog;
pub mod chat;
pub mod models;
pub mod seed;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
