//! Canonical component status.
//!
//! One enum for every flow (manual update, QR scan, bulk transfer). The
//! SMALLINT ids match the seed order of the `component_statuses` table and the
//! wire form is snake_case. Display labels live in [`crate::labels`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Lifecycle status of a precast component (or of a bucket count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ComponentStatus {
    Planning,
    Manufactured,
    InTransit,
    Transported,
    Accepted,
    Installed,
    Rejected,
}

impl ComponentStatus {
    /// Every status, in seed order.
    pub const ALL: [ComponentStatus; 7] = [
        Self::Planning,
        Self::Manufactured,
        Self::InTransit,
        Self::Transported,
        Self::Accepted,
        Self::Installed,
        Self::Rejected,
    ];

    /// Status assigned to newly created components.
    pub const INITIAL: ComponentStatus = Self::Planning;

    /// Wire / database name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Manufactured => "manufactured",
            Self::InTransit => "in_transit",
            Self::Transported => "transported",
            Self::Accepted => "accepted",
            Self::Installed => "installed",
            Self::Rejected => "rejected",
        }
    }

    /// Return the database status ID (1-based seed order).
    pub fn id(self) -> StatusId {
        match self {
            Self::Planning => 1,
            Self::Manufactured => 2,
            Self::InTransit => 3,
            Self::Transported => 4,
            Self::Accepted => 5,
            Self::Installed => 6,
            Self::Rejected => 7,
        }
    }

    /// Inverse of [`ComponentStatus::id`].
    pub fn from_id(id: StatusId) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// `Installed` and `Rejected` end the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Installed | Self::Rejected)
    }

    /// Position in the forward chain. `None` for `Rejected`, which sits
    /// outside the chain.
    pub fn chain_position(self) -> Option<usize> {
        match self {
            Self::Rejected => None,
            other => Some(other.id() as usize - 1),
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentStatus {
    type Err = String;

    /// Accepts the canonical snake_case names plus the legacy labels printed
    /// by older forms (`Fabrication`, `Completed`, `Reject`, ...), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "planning" => Ok(Self::Planning),
            "manufactured" | "fabrication" | "fabricated" => Ok(Self::Manufactured),
            "in_transit" | "intransit" => Ok(Self::InTransit),
            "transported" => Ok(Self::Transported),
            "accepted" => Ok(Self::Accepted),
            "installed" | "completed" => Ok(Self::Installed),
            "rejected" | "reject" => Ok(Self::Rejected),
            _ => Err(format!(
                "Unknown component status '{s}'. Must be one of: {}",
                Self::ALL.map(Self::as_str).join(", ")
            )),
        }
    }
}

impl TryFrom<String> for ComponentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentStatus> for StatusId {
    fn from(value: ComponentStatus) -> Self {
        value.id()
    }
}
