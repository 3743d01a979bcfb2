//! Construction projects. A project owns sections, which own components.

use precast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// `projects` row. `code` is the short site code printed on drawings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `None` starts the project in planning.
    pub status_id: Option<StatusId>,
}

/// Partial update; `None` leaves a column unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status_id: Option<StatusId>,
}
