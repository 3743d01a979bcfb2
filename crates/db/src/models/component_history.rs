//! Component status history model.

use precast_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::StatusId;

/// Status change made through the component form or detail page.
pub const SOURCE_MANUAL: &str = "manual";
/// Status change made by scanning the component's QR label.
pub const SOURCE_QR_SCAN: &str = "qr_scan";

/// A row from the append-only `component_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComponentHistory {
    pub id: DbId,
    pub component_id: DbId,
    #[serde(
        rename = "from_status",
        serialize_with = "crate::models::status::serialize_component_status"
    )]
    pub from_status_id: StatusId,
    #[serde(
        rename = "to_status",
        serialize_with = "crate::models::status::serialize_component_status"
    )]
    pub to_status_id: StatusId,
    pub changed_by: Option<DbId>,
    pub source: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// Everything `ComponentRepo::transition` needs besides the status pair.
#[derive(Debug, Clone)]
pub struct TransitionContext<'a> {
    pub changed_by: DbId,
    pub source: &'static str,
    pub note: Option<&'a str>,
}
