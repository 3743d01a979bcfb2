//! Route definitions for the `/sections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{component, other_component, section};
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// GET    /{section_id}/components             -> component::list_by_section
/// POST   /{section_id}/components             -> component::create
///
/// GET    /{section_id}/other-components       -> other_component::list_by_section
/// POST   /{section_id}/other-components       -> other_component::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(section::get_by_id)
                .put(section::update)
                .delete(section::delete),
        )
        .route(
            "/{section_id}/components",
            get(component::list_by_section).post(component::create),
        )
        .route(
            "/{section_id}/other-components",
            get(other_component::list_by_section).post(other_component::create),
        )
}
