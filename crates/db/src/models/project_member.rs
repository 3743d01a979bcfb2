//! Project membership model.

use precast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub project_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for adding a user to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct AddProjectMember {
    pub user_id: DbId,
}
