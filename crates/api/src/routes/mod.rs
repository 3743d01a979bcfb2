pub mod admin;
pub mod auth;
pub mod component;
pub mod health;
pub mod other_component;
pub mod project;
pub mod qr;
pub mod section;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /statuses                                        status catalogue (public, ?locale=)
///
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update, deactivate
/// /admin/users/{id}/reset-password                 reset password
/// /admin/roles                                     list roles
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{project_id}/members                   list, add
/// /projects/{project_id}/members/{user_id}         remove
/// /projects/{project_id}/sections                  list, create
///
/// /sections/{id}                                   get, update, delete
/// /sections/{section_id}/components                list (?status=), create
/// /sections/{section_id}/other-components          list, create
///
/// /components/{id}                                 get, update, delete
/// /components/{id}/status                          change status (POST)
/// /components/{id}/transitions                     allowed next statuses
/// /components/{id}/history                         status history
/// /components/{id}/qr                              QR payload
///
/// /other-components/{id}                           get
/// /other-components/{id}/transfer                  move quantity (POST)
///
/// /qr/scan                                         resolve and optionally transition (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(handlers::statuses::list))
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/projects", project::router())
        // Section-scoped sub-resources (components, other components).
        .nest("/sections", section::router())
        .nest("/components", component::router())
        .nest("/other-components", other_component::router())
        .nest("/qr", qr::router())
}
