//! Repository for the seeded `roles` table.

use precast_core::roles::Role;
use sqlx::PgPool;

use crate::models::role::RoleRow;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Read-only access to roles. Rows are created by migrations only.
pub struct RoleRepo;

impl RoleRepo {
    /// The row backing `role`. `None` means the seed data is missing it.
    pub async fn find(pool: &PgPool, role: Role) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(role.as_str())
            .fetch_optional(pool)
            .await
    }

    /// All roles in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id");
        sqlx::query_as::<_, RoleRow>(&query).fetch_all(pool).await
    }
}
