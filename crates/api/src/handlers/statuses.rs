//! Status catalogue for clients building pickers and legends.

use axum::extract::Query;
use axum::Json;
use precast_core::labels::status_label;
use precast_core::lifecycle::valid_transitions;
use precast_core::status::{ComponentStatus, StatusId};
use serde::Serialize;

use crate::query::LocaleParams;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub id: StatusId,
    pub status: ComponentStatus,
    pub label: &'static str,
    pub is_terminal: bool,
    /// One-step successors, ignoring roles.
    pub next: &'static [ComponentStatus],
}

/// GET /api/v1/statuses?locale=en|th
///
/// Public; no token required.
pub async fn list(Query(params): Query<LocaleParams>) -> Json<DataResponse<Vec<StatusInfo>>> {
    let data = ComponentStatus::ALL
        .into_iter()
        .map(|status| StatusInfo {
            id: status.id(),
            status,
            label: status_label(status, params.locale),
            is_terminal: status.is_terminal(),
            next: valid_transitions(status),
        })
        .collect();
    Json(DataResponse { data })
}
