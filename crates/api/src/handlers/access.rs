//! Project-scoped access checks shared by the hierarchy handlers.
//!
//! Admins reach every project. Everyone else must be listed in
//! `project_members` for the project that owns the resource. Loaders return
//! `NotFound` before checking membership, so a missing id and a foreign id
//! are distinguishable only to admins.

use precast_core::error::CoreError;
use precast_core::session::Session;
use precast_core::types::DbId;
use precast_db::models::component::Component;
use precast_db::models::other_component::OtherComponent;
use precast_db::models::project::Project;
use precast_db::models::section::Section;
use precast_db::repositories::{
    ComponentRepo, OtherComponentRepo, ProjectMemberRepo, ProjectRepo, SectionRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fail with 403 unless `session` may see `project_id`.
pub async fn ensure_project_access(
    state: &AppState,
    session: &Session,
    project_id: DbId,
) -> AppResult<()> {
    if session.is_admin() {
        return Ok(());
    }
    let is_member = ProjectMemberRepo::is_member(&state.pool, project_id, session.user_id).await?;
    if session.may_access_project(is_member) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not a member of this project".into(),
        )))
    }
}

pub async fn load_project(state: &AppState, session: &Session, id: DbId) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    ensure_project_access(state, session, project.id).await?;
    Ok(project)
}

pub async fn load_section(state: &AppState, session: &Session, id: DbId) -> AppResult<Section> {
    let section = SectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;
    ensure_project_access(state, session, section.project_id).await?;
    Ok(section)
}

/// Load a component together with its section (for the owning project id).
pub async fn load_component(
    state: &AppState,
    session: &Session,
    id: DbId,
) -> AppResult<(Component, Section)> {
    let component = ComponentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))?;
    let section = load_section(state, session, component.section_id).await?;
    Ok((component, section))
}

pub async fn load_other_component(
    state: &AppState,
    session: &Session,
    id: DbId,
) -> AppResult<OtherComponent> {
    let row = OtherComponentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OtherComponent",
            id,
        }))?;
    load_section(state, session, row.section_id).await?;
    Ok(row)
}
