//! Repository for the `project_members` table.

use precast_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_member::ProjectMember;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "project_id, user_id, created_at";

/// Provides membership operations for projects.
pub struct ProjectMemberRepo;

impl ProjectMemberRepo {
    /// Add `user_id` to `project_id`. Adding an existing member is a no-op
    /// that returns the existing row.
    pub async fn add(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<ProjectMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_members (project_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, user_id) DO UPDATE SET project_id = EXCLUDED.project_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a membership. Returns `true` if a row was deleted.
    pub async fn remove(pool: &PgPool, project_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_members WHERE project_id = $1 AND user_id = $2")
                .bind(project_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List members of a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_members WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn is_member(pool: &PgPool, project_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM project_members WHERE project_id = $1 AND user_id = $2)",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
