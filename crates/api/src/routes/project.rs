//! Route definitions for the `/projects` resource.
//!
//! Also nests membership and section routes under `/projects/{project_id}/...`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// GET    /{project_id}/members                -> list_members
/// POST   /{project_id}/members                -> add_member
/// DELETE /{project_id}/members/{user_id}      -> remove_member
///
/// GET    /{project_id}/sections               -> list_sections
/// POST   /{project_id}/sections               -> create_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/members",
            get(project::list_members).post(project::add_member),
        )
        .route(
            "/{project_id}/members/{user_id}",
            delete(project::remove_member),
        )
        .route(
            "/{project_id}/sections",
            get(project::list_sections).post(project::create_section),
        )
}
