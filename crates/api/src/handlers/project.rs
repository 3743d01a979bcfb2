//! Handlers for the `/projects` resource, its members, and its sections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use precast_core::error::CoreError;
use precast_core::types::DbId;
use precast_db::models::project::{CreateProject, Project, UpdateProject};
use precast_db::models::project_member::{AddProjectMember, ProjectMember};
use precast_db::models::section::{CreateSection, Section};
use precast_db::models::status::{ProjectStatus, SectionStatus, StatusId};
use precast_db::repositories::{ProjectMemberRepo, ProjectRepo, SectionRepo, UserRepo};

use super::access::load_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// A manager creating a project becomes its first member.
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    require_name(&input.name, "Project name")?;
    validate_status(input.status_id, ProjectStatus::is_valid_id, "project")?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    if !user.session().is_admin() {
        ProjectMemberRepo::add(&state.pool, project.id, user.user_id).await?;
    }

    tracing::info!(project_id = project.id, user_id = user.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
///
/// Admins see every project; everyone else sees the projects they belong to.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = if user.session().is_admin() {
        ProjectRepo::list(&state.pool).await?
    } else {
        ProjectRepo::list_for_member(&state.pool, user.user_id).await?
    };
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = load_project(&state, &user.session(), id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    load_project(&state, &user.session(), id).await?;
    if let Some(name) = &input.name {
        require_name(name, "Project name")?;
    }
    validate_status(input.status_id, ProjectStatus::is_valid_id, "project")?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_project(&state, &user.session(), id).await?;
    if ProjectRepo::soft_delete(&state.pool, id).await? {
        tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    load_project(&state, &user.session(), project_id).await?;
    let members = ProjectMemberRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/projects/{project_id}/members
pub async fn add_member(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddProjectMember>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectMember>>)> {
    load_project(&state, &user.session(), project_id).await?;
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    let member = ProjectMemberRepo::add(&state.pool, project_id, input.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// DELETE /api/v1/projects/{project_id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path((project_id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    load_project(&state, &user.session(), project_id).await?;
    if ProjectMemberRepo::remove(&state.pool, project_id, member_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectMember",
            id: member_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Sections (project-scoped)
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/sections
pub async fn list_sections(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Section>>>> {
    load_project(&state, &user.session(), project_id).await?;
    let sections = SectionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/projects/{project_id}/sections
pub async fn create_section(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateSection>,
) -> AppResult<(StatusCode, Json<DataResponse<Section>>)> {
    load_project(&state, &user.session(), project_id).await?;
    require_name(&input.name, "Section name")?;
    validate_status(input.status_id, SectionStatus::is_valid_id, "section")?;

    input.project_id = project_id;
    let section = SectionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn require_name(name: &str, what: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{what} must not be empty"
        ))));
    }
    Ok(())
}

pub(crate) fn validate_status(
    status_id: Option<StatusId>,
    is_valid: fn(StatusId) -> bool,
    kind: &str,
) -> AppResult<()> {
    match status_id {
        Some(id) if !is_valid(id) => Err(AppError::Core(CoreError::Validation(format!(
            "Unknown {kind} status id {id}"
        )))),
        _ => Ok(()),
    }
}
