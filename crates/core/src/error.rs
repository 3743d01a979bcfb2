//! Domain errors shared by the db and api crates.

use crate::lifecycle::LifecycleError;
use crate::types::DbId;

/// Every fallible domain operation returns this. The api crate maps each
/// variant to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by a natural key rather than an id (e.g. a QR-scanned name).
    #[error("{entity} '{key}' not found")]
    NotFoundByKey { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Uniqueness clash or a concurrent write that lost the race.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A rejected status change or quantity transfer.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Internal error: {0}")]
    Internal(String),
}
