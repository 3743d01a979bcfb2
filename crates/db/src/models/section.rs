//! Section (floor/level) entity model and DTOs.

use precast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A section row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// Tower grouping label, if the project has several towers.
    pub tower: Option<String>,
    pub floor: Option<String>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new section. `project_id` is taken from the URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    #[serde(default)]
    pub project_id: DbId,
    pub name: String,
    pub tower: Option<String>,
    pub floor: Option<String>,
    /// Defaults to 1 (Pending) if omitted.
    pub status_id: Option<StatusId>,
}

/// DTO for updating an existing section. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSection {
    pub name: Option<String>,
    pub tower: Option<String>,
    pub floor: Option<String>,
    pub status_id: Option<StatusId>,
}
