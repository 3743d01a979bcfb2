//! QR scan handler.
//!
//! A scan identifies a component by `(section, name)` from the printed
//! payload. The status printed on the label may be stale; the stored status
//! is what the lifecycle validates against.

use axum::extract::State;
use axum::Json;
use precast_core::error::CoreError;
use precast_core::lifecycle::next_status;
use precast_core::qr::QrPayload;
use precast_core::status::ComponentStatus;
use precast_db::models::component::Component;
use precast_db::models::component_history::{ComponentHistory, SOURCE_QR_SCAN};
use precast_db::repositories::ComponentRepo;
use serde::{Deserialize, Serialize};

use super::access::load_section;
use super::component::{apply_transition, stored_status};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Raw string read from the QR symbol.
    pub payload: String,
    /// When set, move the component to this status in the same request.
    pub target: Option<ComponentStatus>,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub component: Component,
    pub stored_status: ComponentStatus,
    pub payload_status: ComponentStatus,
    /// The label was printed before the last status change.
    pub status_mismatch: bool,
    pub next_status: ComponentStatus,
    pub allowed_targets: Vec<ComponentStatus>,
    /// Present only when `target` was given and a row was written.
    pub history: Option<ComponentHistory>,
}

/// POST /api/v1/qr/scan
pub async fn scan(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ScanRequest>,
) -> AppResult<Json<DataResponse<ScanResponse>>> {
    let session = user.session();
    let payload = QrPayload::decode(&input.payload)?;

    let section = load_section(&state, &session, payload.section).await?;
    if section.project_id != payload.project {
        return Err(AppError::Core(CoreError::Validation(format!(
            "QR payload section {} does not belong to project {}",
            payload.section, payload.project
        ))));
    }

    let component = ComponentRepo::find_by_section_and_name(&state.pool, section.id, &payload.name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Component",
                key: payload.name.clone(),
            })
        })?;

    let (component, history) = match input.target {
        Some(target) => {
            let outcome = apply_transition(
                &state,
                &session,
                component,
                target,
                SOURCE_QR_SCAN,
                input.note.as_deref(),
            )
            .await?;
            (outcome.component, outcome.history)
        }
        None => (component, None),
    };

    let stored = stored_status(&component)?;
    tracing::debug!(
        component_id = component.id,
        user_id = session.user_id,
        stored = %stored,
        printed = %payload.status,
        "QR scanned",
    );

    Ok(Json(DataResponse {
        data: ScanResponse {
            stored_status: stored,
            payload_status: payload.status,
            status_mismatch: stored != payload.status,
            next_status: next_status(stored),
            allowed_targets: session.allowed_targets(stored).to_vec(),
            history,
            component,
        },
    }))
}
