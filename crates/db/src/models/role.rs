//! Seeded role rows.

use precast_core::roles::Role;
use precast_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `roles` table. The set is closed; see [`Role`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RoleRow {
    /// The typed role, or `None` for a row the code does not know about.
    pub fn role(&self) -> Option<Role> {
        self.name.parse().ok()
    }
}
