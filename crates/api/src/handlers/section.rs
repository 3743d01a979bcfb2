//! Handlers for the `/sections` resource.
//!
//! Listing and creation happen under `/projects/{project_id}/sections`
//! (see [`super::project`]); these handlers address a section by its own id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use precast_core::error::CoreError;
use precast_core::types::DbId;
use precast_db::models::section::{Section, UpdateSection};
use precast_db::models::status::SectionStatus;
use precast_db::repositories::SectionRepo;

use super::access::load_section;
use super::project::{require_name, validate_status};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Section>>> {
    let section = load_section(&state, &user.session(), id).await?;
    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/sections/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<DataResponse<Section>>> {
    load_section(&state, &user.session(), id).await?;
    if let Some(name) = &input.name {
        require_name(name, "Section name")?;
    }
    validate_status(input.status_id, SectionStatus::is_valid_id, "section")?;

    let section = SectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/sections/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_section(&state, &user.session(), id).await?;
    if SectionRepo::soft_delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
    }
}
