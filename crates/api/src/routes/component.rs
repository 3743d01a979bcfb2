//! Route definitions for the `/components` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::component;
use crate::state::AppState;

/// Routes mounted at `/components`.
///
/// ```text
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}/status        -> update_status
/// GET    /{id}/transitions   -> transitions
/// GET    /{id}/history       -> history
/// GET    /{id}/qr            -> qr
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(component::get_by_id)
                .put(component::update)
                .delete(component::delete),
        )
        .route("/{id}/status", post(component::update_status))
        .route("/{id}/transitions", get(component::transitions))
        .route("/{id}/history", get(component::history))
        .route("/{id}/qr", get(component::qr))
}
