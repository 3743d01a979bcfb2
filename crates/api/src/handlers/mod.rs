//! HTTP handlers, one module per resource.

pub mod access;
pub mod admin;
pub mod auth;
pub mod component;
pub mod other_component;
pub mod project;
pub mod qr;
pub mod section;
pub mod statuses;
