//! Route definitions for QR scanning.

use axum::routing::post;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

/// Routes mounted at `/qr`.
///
/// ```text
/// POST /scan   -> scan
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/scan", post(qr::scan))
}
