//! Route definitions for the `/other-components` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::other_component;
use crate::state::AppState;

/// Routes mounted at `/other-components`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete (manager)
/// POST   /{id}/transfer   -> transfer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(other_component::get_by_id).delete(other_component::delete),
        )
        .route("/{id}/transfer", post(other_component::transfer))
}
