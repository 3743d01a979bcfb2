//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller's [`Session`](precast_core::session::Session)
//!   from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireManager`] -- Requires `manager` or `admin`.

pub mod auth;
pub mod rbac;
