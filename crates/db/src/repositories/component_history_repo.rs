//! Repository for the append-only `component_history` table.

use precast_core::status::ComponentStatus;
use precast_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::component_history::{ComponentHistory, TransitionContext};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, component_id, from_status_id, to_status_id, changed_by, source, note, created_at";

/// Provides insert and read operations for component history.
pub struct ComponentHistoryRepo;

impl ComponentHistoryRepo {
    /// Append a history row inside an open transaction.
    pub(crate) async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        component_id: DbId,
        from: ComponentStatus,
        to: ComponentStatus,
        ctx: &TransitionContext<'_>,
    ) -> Result<ComponentHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO component_history
                (component_id, from_status_id, to_status_id, changed_by, source, note)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ComponentHistory>(&query)
            .bind(component_id)
            .bind(from.id())
            .bind(to.id())
            .bind(ctx.changed_by)
            .bind(ctx.source)
            .bind(ctx.note)
            .fetch_one(&mut **tx)
            .await
    }

    /// List the history of a component, oldest first.
    pub async fn list_by_component(
        pool: &PgPool,
        component_id: DbId,
    ) -> Result<Vec<ComponentHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM component_history
             WHERE component_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ComponentHistory>(&query)
            .bind(component_id)
            .fetch_all(pool)
            .await
    }
}
