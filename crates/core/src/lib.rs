//! Domain layer for the precast component tracker.
//!
//! Everything here is pure and synchronous: no I/O, no database, no HTTP.
//! The `db` and `api` crates build on top of it.

pub mod component;
pub mod error;
pub mod labels;
pub mod lifecycle;
pub mod qr;
pub mod roles;
pub mod session;
pub mod status;
pub mod types;
