//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod component_history_repo;
pub mod component_repo;
pub mod other_component_repo;
pub mod project_member_repo;
pub mod project_repo;
pub mod role_repo;
pub mod section_repo;
pub mod session_repo;
pub mod user_repo;

pub use component_history_repo::ComponentHistoryRepo;
pub use component_repo::ComponentRepo;
pub use other_component_repo::{OtherComponentRepo, TransferError};
pub use project_member_repo::ProjectMemberRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use section_repo::SectionRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
