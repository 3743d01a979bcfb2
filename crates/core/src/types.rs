//! Shared scalar aliases.

/// Row id. Every table keys on BIGSERIAL.
pub type DbId = i64;

/// Stored as TIMESTAMPTZ, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
