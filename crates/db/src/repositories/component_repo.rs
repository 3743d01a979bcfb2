//! Repository for the `components` table.

use precast_core::status::ComponentStatus;
use precast_core::types::DbId;
use sqlx::PgPool;

use crate::models::component::{Component, CreateComponent, UpdateComponent};
use crate::models::component_history::{ComponentHistory, TransitionContext};
use crate::repositories::component_history_repo::ComponentHistoryRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_id, name, component_type, \
                       width, height, thickness, extension, reduction, area, volume, weight, \
                       status_id, version, created_at, updated_at";

/// Provides CRUD and status-transition operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// Insert a new component in the initial `planning` status.
    pub async fn create(pool: &PgPool, input: &CreateComponent) -> Result<Component, sqlx::Error> {
        let query = format!(
            "INSERT INTO components
                (section_id, name, component_type,
                 width, height, thickness, extension, reduction, area, volume, weight, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(input.section_id)
            .bind(&input.name)
            .bind(&input.component_type)
            .bind(input.width)
            .bind(input.height)
            .bind(input.thickness)
            .bind(input.extension)
            .bind(input.reduction)
            .bind(input.area)
            .bind(input.volume)
            .bind(input.weight)
            .bind(ComponentStatus::INITIAL.id())
            .fetch_one(pool)
            .await
    }

    /// Find a component by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Component>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM components WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a component by its name within a section (QR lookups).
    pub async fn find_by_section_and_name(
        pool: &PgPool,
        section_id: DbId,
        name: &str,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM components
             WHERE section_id = $1 AND name = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(section_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List components of a section, optionally filtered by status.
    pub async fn list_by_section(
        pool: &PgPool,
        section_id: DbId,
        status: Option<ComponentStatus>,
    ) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM components
             WHERE section_id = $1 AND deleted_at IS NULL
               AND ($2::SMALLINT IS NULL OR status_id = $2)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(section_id)
            .bind(status.map(ComponentStatus::id))
            .fetch_all(pool)
            .await
    }

    /// Update descriptive fields. Only non-`None` fields in `input` are
    /// applied; the status is never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponent,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!(
            "UPDATE components SET
                name = COALESCE($2, name),
                component_type = COALESCE($3, component_type),
                width = COALESCE($4, width),
                height = COALESCE($5, height),
                thickness = COALESCE($6, thickness),
                extension = COALESCE($7, extension),
                reduction = COALESCE($8, reduction),
                area = COALESCE($9, area),
                volume = COALESCE($10, volume),
                weight = COALESCE($11, weight)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.component_type)
            .bind(input.width)
            .bind(input.height)
            .bind(input.thickness)
            .bind(input.extension)
            .bind(input.reduction)
            .bind(input.area)
            .bind(input.volume)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    /// Move a component from `expected` to `target` and append a history row,
    /// both in one transaction.
    ///
    /// The update only applies while the stored status still equals
    /// `expected`. Returns `None` when it does not (a concurrent change won,
    /// or the row is gone); nothing is written in that case. The caller is
    /// responsible for having validated `expected -> target`.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        expected: ComponentStatus,
        target: ComponentStatus,
        ctx: &TransitionContext<'_>,
    ) -> Result<Option<(Component, ComponentHistory)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE components SET status_id = $3, version = version + 1
             WHERE id = $1 AND status_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let Some(component) = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(expected.id())
            .bind(target.id())
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let history = ComponentHistoryRepo::insert(&mut tx, id, expected, target, ctx).await?;

        tx.commit().await?;
        Ok(Some((component, history)))
    }

    /// Soft-delete a component by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE components SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
