//! Shared query parameter types for API handlers.

use precast_core::labels::Locale;
use precast_core::status::ComponentStatus;
use serde::Deserialize;

/// `?status=` filter for component listings. Accepts the same names as the
/// status enum, including legacy labels.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<ComponentStatus>,
}

/// `?locale=en|th` for endpoints that return display labels.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Locale,
}
