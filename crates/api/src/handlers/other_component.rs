//! Handlers for quantity-tracked "other components".

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use precast_core::component::validate_label;
use precast_core::error::CoreError;
use precast_core::lifecycle::{role_may_transfer, LifecycleError};
use precast_core::types::DbId;
use precast_db::models::other_component::{
    CreateOtherComponent, OtherComponentResponse, TransferQuantity,
};
use precast_db::repositories::OtherComponentRepo;

use super::access::{load_other_component, load_section};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/sections/{section_id}/other-components
///
/// Every unit of a new bucket starts in `planning`.
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(section_id): Path<DbId>,
    Json(mut input): Json<CreateOtherComponent>,
) -> AppResult<(StatusCode, Json<DataResponse<OtherComponentResponse>>)> {
    load_section(&state, &user.session(), section_id).await?;
    validate_label(&input.name, &input.component_type)?;
    if input.total < 0 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "total must not be negative (got {})",
            input.total
        ))));
    }

    input.section_id = section_id;
    let row = OtherComponentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row.into() })))
}

/// GET /api/v1/sections/{section_id}/other-components
pub async fn list_by_section(
    State(state): State<AppState>,
    user: AuthUser,
    Path(section_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OtherComponentResponse>>>> {
    load_section(&state, &user.session(), section_id).await?;
    let rows = OtherComponentRepo::list_by_section(&state.pool, section_id).await?;
    Ok(Json(DataResponse {
        data: rows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/other-components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OtherComponentResponse>>> {
    let row = load_other_component(&state, &user.session(), id).await?;
    Ok(Json(DataResponse { data: row.into() }))
}

/// POST /api/v1/other-components/{id}/transfer
///
/// Move a quantity between status counts. The role check runs first; the
/// count checks run under a row lock in the repository.
pub async fn transfer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<TransferQuantity>,
) -> AppResult<Json<DataResponse<OtherComponentResponse>>> {
    load_other_component(&state, &user.session(), id).await?;

    if !role_may_transfer(user.role, input.from, input.to) {
        return Err(LifecycleError::Forbidden {
            role: user.role,
            from: input.from,
            to: input.to,
        }
        .into());
    }

    let row = OtherComponentRepo::transfer(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OtherComponent",
            id,
        }))?;

    tracing::info!(
        other_component_id = id,
        user_id = user.user_id,
        from = %input.from,
        to = %input.to,
        quantity = input.quantity,
        "Other-component quantity transferred",
    );
    Ok(Json(DataResponse { data: row.into() }))
}

/// DELETE /api/v1/other-components/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_other_component(&state, &user.session(), id).await?;
    if !OtherComponentRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "OtherComponent",
            id,
        }));
    }
    tracing::info!(other_component_id = id, user_id = user.user_id, "Other component deleted");
    Ok(StatusCode::NO_CONTENT)
}
