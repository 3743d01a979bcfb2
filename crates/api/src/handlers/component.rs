//! Handlers for components and their status lifecycle.
//!
//! Every status change, whether from the detail page or a QR scan, goes
//! through [`apply_transition`]: validate against the caller's role, then
//! persist with an optimistic check on the stored status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use precast_core::component::{validate_dimensions, validate_label, validate_optional_dimension};
use precast_core::error::CoreError;
use precast_core::lifecycle::next_status;
use precast_core::qr::QrPayload;
use precast_core::session::Session;
use precast_core::status::ComponentStatus;
use precast_core::types::DbId;
use precast_db::models::component::{Component, CreateComponent, UpdateComponent};
use precast_db::models::component_history::{ComponentHistory, TransitionContext, SOURCE_MANUAL};
use precast_db::repositories::{ComponentHistoryRepo, ComponentRepo};
use serde::{Deserialize, Serialize};

use super::access::{load_component, load_section};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ComponentStatus,
    pub note: Option<String>,
}

/// Result of a status change. `history` is `None` for the
/// `installed -> installed` re-confirmation, which writes nothing.
#[derive(Debug, Serialize)]
pub struct TransitionOutcome {
    pub component: Component,
    pub history: Option<ComponentHistory>,
}

/// What the caller may do next with a component.
#[derive(Debug, Serialize)]
pub struct TransitionOptions {
    pub status: ComponentStatus,
    pub next_status: ComponentStatus,
    pub is_terminal: bool,
    pub allowed_targets: Vec<ComponentStatus>,
}

impl TransitionOptions {
    pub fn for_session(session: &Session, status: ComponentStatus) -> Self {
        Self {
            status,
            next_status: next_status(status),
            is_terminal: status.is_terminal(),
            allowed_targets: session.allowed_targets(status).to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub payload: QrPayload,
    /// The exact string to render into the QR symbol.
    pub encoded: String,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/sections/{section_id}/components
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(section_id): Path<DbId>,
    Json(mut input): Json<CreateComponent>,
) -> AppResult<(StatusCode, Json<DataResponse<Component>>)> {
    load_section(&state, &user.session(), section_id).await?;
    validate_label(&input.name, &input.component_type)?;
    validate_dimensions(&input.dimensions())?;

    input.section_id = section_id;
    let component = ComponentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        component_id = component.id,
        section_id,
        name = %component.name,
        "Component created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: component })))
}

/// GET /api/v1/sections/{section_id}/components?status=
pub async fn list_by_section(
    State(state): State<AppState>,
    user: AuthUser,
    Path(section_id): Path<DbId>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<DataResponse<Vec<Component>>>> {
    load_section(&state, &user.session(), section_id).await?;
    let components = ComponentRepo::list_by_section(&state.pool, section_id, filter.status).await?;
    Ok(Json(DataResponse { data: components }))
}

/// GET /api/v1/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Component>>> {
    let (component, _) = load_component(&state, &user.session(), id).await?;
    Ok(Json(DataResponse { data: component }))
}

/// PUT /api/v1/components/{id}
///
/// Descriptive fields only. A `status` key in the body is ignored; use
/// `POST /components/{id}/status`.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComponent>,
) -> AppResult<Json<DataResponse<Component>>> {
    let (current, _) = load_component(&state, &user.session(), id).await?;

    validate_label(
        input.name.as_deref().unwrap_or(&current.name),
        input
            .component_type
            .as_deref()
            .unwrap_or(&current.component_type),
    )?;
    for (field, value) in input.dimension_fields() {
        validate_optional_dimension(field, value)?;
    }

    let component = ComponentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))?;
    Ok(Json(DataResponse { data: component }))
}

/// DELETE /api/v1/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_component(&state, &user.session(), id).await?;
    if ComponentRepo::soft_delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// GET /api/v1/components/{id}/transitions
pub async fn transitions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TransitionOptions>>> {
    let session = user.session();
    let (component, _) = load_component(&state, &session, id).await?;
    let status = stored_status(&component)?;
    Ok(Json(DataResponse {
        data: TransitionOptions::for_session(&session, status),
    }))
}

/// POST /api/v1/components/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdateRequest>,
) -> AppResult<Json<DataResponse<TransitionOutcome>>> {
    let session = user.session();
    let (component, _) = load_component(&state, &session, id).await?;
    let outcome = apply_transition(
        &state,
        &session,
        component,
        input.status,
        SOURCE_MANUAL,
        input.note.as_deref(),
    )
    .await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/components/{id}/history
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ComponentHistory>>>> {
    load_component(&state, &user.session(), id).await?;
    let rows = ComponentHistoryRepo::list_by_component(&state.pool, id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/components/{id}/qr
pub async fn qr(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QrResponse>>> {
    let (component, section) = load_component(&state, &user.session(), id).await?;
    let payload = QrPayload::new(
        section.project_id,
        section.id,
        component.name.clone(),
        component.component_type.clone(),
        &component.dimensions(),
        stored_status(&component)?,
    );
    let encoded = payload.encode()?;
    Ok(Json(DataResponse {
        data: QrResponse { payload, encoded },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The component's status as the enum. An unseeded id is a data error.
pub(crate) fn stored_status(component: &Component) -> AppResult<ComponentStatus> {
    component.status().ok_or_else(|| {
        AppError::InternalError(format!(
            "Component {} has unknown status id {}",
            component.id, component.status_id
        ))
    })
}

/// Validate and persist a status change for `component`.
///
/// A concurrent change between load and write surfaces as 409 `CONFLICT`;
/// the caller should reload and retry.
pub(crate) async fn apply_transition(
    state: &AppState,
    session: &Session,
    component: Component,
    target: ComponentStatus,
    source: &'static str,
    note: Option<&str>,
) -> AppResult<TransitionOutcome> {
    let current = stored_status(&component)?;
    session.validate_transition(current, target)?;

    if current == target {
        return Ok(TransitionOutcome {
            component,
            history: None,
        });
    }

    let ctx = TransitionContext {
        changed_by: session.user_id,
        source,
        note,
    };
    let (updated, history) =
        ComponentRepo::transition(&state.pool, component.id, current, target, &ctx)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict(
                    "Component status changed concurrently; reload and retry".into(),
                ))
            })?;

    tracing::info!(
        component_id = updated.id,
        user_id = session.user_id,
        from = %current,
        to = %target,
        source,
        "Component status changed",
    );
    Ok(TransitionOutcome {
        component: updated,
        history: Some(history),
    })
}
