//! Repository for the `sections` table.

use precast_core::types::DbId;
use sqlx::PgPool;

use crate::models::section::{CreateSection, Section, UpdateSection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, tower, floor, status_id, created_at, updated_at";

/// Provides CRUD operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Pending).
    pub async fn create(pool: &PgPool, input: &CreateSection) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (project_id, name, tower, floor, status_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.tower)
            .bind(&input.floor)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }

    /// Find a section by ID. Excludes soft-deleted rows and sections of
    /// soft-deleted projects.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections
             WHERE id = $1 AND deleted_at IS NULL
               AND project_id IN (SELECT id FROM projects WHERE deleted_at IS NULL)"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sections of a project ordered by tower, then name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections
             WHERE project_id = $1 AND deleted_at IS NULL
             ORDER BY tower ASC NULLS FIRST, name ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a section. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET
                name = COALESCE($2, name),
                tower = COALESCE($3, tower),
                floor = COALESCE($4, floor),
                status_id = COALESCE($5, status_id)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.tower)
            .bind(&input.floor)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a section by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sections SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
