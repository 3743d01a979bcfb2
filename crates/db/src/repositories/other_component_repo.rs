//! Repository for the `other_components` table.

use precast_core::lifecycle::{apply_quantity_transfer, LifecycleError, OtherComponentBucket};
use precast_core::status::ComponentStatus;
use precast_core::types::DbId;
use sqlx::PgPool;

use crate::models::other_component::{CreateOtherComponent, OtherComponent, TransferQuantity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_id, name, component_type, total, \
                       planning_count, manufactured_count, in_transit_count, transported_count, \
                       accepted_count, installed_count, rejected_count, \
                       manufactured_released, transported_released, created_at, updated_at";

/// Failure of [`OtherComponentRepo::transfer`].
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Provides CRUD and quantity-transfer operations for other components.
pub struct OtherComponentRepo;

impl OtherComponentRepo {
    /// Insert a new bucket with every unit in `planning`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOtherComponent,
    ) -> Result<OtherComponent, sqlx::Error> {
        let query = format!(
            "INSERT INTO other_components (section_id, name, component_type, total, planning_count)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OtherComponent>(&query)
            .bind(input.section_id)
            .bind(&input.name)
            .bind(&input.component_type)
            .bind(input.total)
            .fetch_one(pool)
            .await
    }

    /// Find a bucket by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OtherComponent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM other_components WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, OtherComponent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List buckets of a section ordered by name.
    pub async fn list_by_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<OtherComponent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM other_components
             WHERE section_id = $1 AND deleted_at IS NULL
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, OtherComponent>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a quantity transfer under a row lock.
    ///
    /// Returns `Ok(None)` if the bucket does not exist. A rejected transfer
    /// rolls back and leaves the stored counts unchanged.
    pub async fn transfer(
        pool: &PgPool,
        id: DbId,
        input: &TransferQuantity,
    ) -> Result<Option<OtherComponent>, TransferError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM other_components
             WHERE id = $1 AND deleted_at IS NULL
             FOR UPDATE"
        );
        let Some(row) = sqlx::query_as::<_, OtherComponent>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let next = match apply_quantity_transfer(&row.to_bucket(), input.from, input.to, input.quantity) {
            Ok(next) => next,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        let updated = Self::write_counts(&mut tx, id, &next).await?;
        tx.commit().await?;

        tracing::debug!(
            other_component_id = id,
            from = %input.from,
            to = %input.to,
            quantity = input.quantity,
            "Quantity transferred",
        );
        Ok(Some(updated))
    }

    async fn write_counts(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        bucket: &OtherComponentBucket,
    ) -> Result<OtherComponent, sqlx::Error> {
        use ComponentStatus::*;

        let query = format!(
            "UPDATE other_components SET
                planning_count = $2,
                manufactured_count = $3,
                in_transit_count = $4,
                transported_count = $5,
                accepted_count = $6,
                installed_count = $7,
                rejected_count = $8,
                manufactured_released = $9,
                transported_released = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OtherComponent>(&query)
            .bind(id)
            .bind(bucket.count(Planning))
            .bind(bucket.count(Manufactured))
            .bind(bucket.count(InTransit))
            .bind(bucket.count(Transported))
            .bind(bucket.count(Accepted))
            .bind(bucket.count(Installed))
            .bind(bucket.count(Rejected))
            .bind(bucket.released(Manufactured))
            .bind(bucket.released(Transported))
            .fetch_one(&mut **tx)
            .await
    }

    /// Soft-delete a bucket by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE other_components SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
