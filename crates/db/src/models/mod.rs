//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod component;
pub mod component_history;
pub mod other_component;
pub mod project;
pub mod project_member;
pub mod role;
pub mod section;
pub mod session;
pub mod status;
pub mod user;
