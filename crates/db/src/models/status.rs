//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table. Component statuses live
//! in `precast_core::status` because the lifecycle needs them.

use precast_core::status::ComponentStatus;
use serde::{Serialize, Serializer};

pub use precast_core::status::StatusId;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Whether `id` is a seeded value.
            pub fn is_valid_id(id: StatusId) -> bool {
                [$( $val ),+].contains(&id)
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Planning = 1,
        InProgress = 2,
        Completed = 3,
        Suspended = 4,
    }
}

define_status_enum! {
    /// Section (floor) progress status.
    SectionStatus {
        Pending = 1,
        InProgress = 2,
        Completed = 3,
    }
}

/// Serialize a component `status_id` column as its snake_case name.
///
/// Unknown ids fall back to the raw number so a bad row is still visible.
pub fn serialize_component_status<S: Serializer>(id: &StatusId, s: S) -> Result<S::Ok, S::Error> {
    match ComponentStatus::from_id(*id) {
        Some(status) => status.serialize(s),
        None => s.serialize_i16(*id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_ids_match_seed_data() {
        assert_eq!(ProjectStatus::Planning.id(), 1);
        assert_eq!(ProjectStatus::InProgress.id(), 2);
        assert_eq!(ProjectStatus::Completed.id(), 3);
        assert_eq!(ProjectStatus::Suspended.id(), 4);
    }

    #[test]
    fn section_status_ids_match_seed_data() {
        assert_eq!(SectionStatus::Pending.id(), 1);
        assert_eq!(SectionStatus::InProgress.id(), 2);
        assert_eq!(SectionStatus::Completed.id(), 3);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = ProjectStatus::Suspended.into();
        assert_eq!(id, 4);
    }

    #[test]
    fn is_valid_id_only_accepts_seeded_values() {
        assert!(ProjectStatus::is_valid_id(2));
        assert!(!ProjectStatus::is_valid_id(0));
        assert!(!SectionStatus::is_valid_id(4));
    }

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "status", serialize_with = "serialize_component_status")]
        status_id: StatusId,
    }

    #[test]
    fn component_status_serializes_by_name() {
        let json = serde_json::to_value(Row { status_id: 3 }).unwrap();
        assert_eq!(json["status"], "in_transit");

        let json = serde_json::to_value(Row { status_id: 99 }).unwrap();
        assert_eq!(json["status"], 99);
    }
}
