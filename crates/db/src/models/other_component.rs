//! Quantity-tracked "other component" rows and DTOs.

use precast_core::lifecycle::OtherComponentBucket;
use precast_core::status::ComponentStatus;
use precast_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `other_components` table. One column per status count.
#[derive(Debug, Clone, FromRow)]
pub struct OtherComponent {
    pub id: DbId,
    pub section_id: DbId,
    pub name: String,
    pub component_type: String,
    pub total: i32,
    pub planning_count: i32,
    pub manufactured_count: i32,
    pub in_transit_count: i32,
    pub transported_count: i32,
    pub accepted_count: i32,
    pub installed_count: i32,
    pub rejected_count: i32,
    pub manufactured_released: i32,
    pub transported_released: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OtherComponent {
    /// The stored counts as a lifecycle bucket. Zero counts are omitted.
    pub fn to_bucket(&self) -> OtherComponentBucket {
        let bucket = ComponentStatus::ALL
            .into_iter()
            .map(|status| (status, self.count(status)))
            .filter(|(_, count)| *count != 0)
            .fold(OtherComponentBucket::new(self.total), |bucket, (status, count)| {
                bucket.with_count(status, count)
            });
        [
            (ComponentStatus::Manufactured, self.manufactured_released),
            (ComponentStatus::Transported, self.transported_released),
        ]
        .into_iter()
        .filter(|(_, released)| *released != 0)
        .fold(bucket, |bucket, (status, released)| {
            bucket.with_released(status, released)
        })
    }

    fn count(&self, status: ComponentStatus) -> i32 {
        match status {
            ComponentStatus::Planning => self.planning_count,
            ComponentStatus::Manufactured => self.manufactured_count,
            ComponentStatus::InTransit => self.in_transit_count,
            ComponentStatus::Transported => self.transported_count,
            ComponentStatus::Accepted => self.accepted_count,
            ComponentStatus::Installed => self.installed_count,
            ComponentStatus::Rejected => self.rejected_count,
        }
    }
}

/// API shape of an other-component: the bucket plus identifying fields.
#[derive(Debug, Clone, Serialize)]
pub struct OtherComponentResponse {
    pub id: DbId,
    pub section_id: DbId,
    pub name: String,
    pub component_type: String,
    #[serde(flatten)]
    pub bucket: OtherComponentBucket,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<OtherComponent> for OtherComponentResponse {
    fn from(row: OtherComponent) -> Self {
        let bucket = row.to_bucket();
        Self {
            id: row.id,
            section_id: row.section_id,
            name: row.name,
            component_type: row.component_type,
            bucket,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a bucket. Every unit starts in `planning`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOtherComponent {
    #[serde(default)]
    pub section_id: DbId,
    pub name: String,
    pub component_type: String,
    pub total: i32,
}

/// DTO for a bulk quantity move.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferQuantity {
    pub from: ComponentStatus,
    pub to: ComponentStatus,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row() -> OtherComponent {
        OtherComponent {
            id: 1,
            section_id: 2,
            name: "Stair S-1".to_string(),
            component_type: "Stair".to_string(),
            total: 100,
            planning_count: 0,
            manufactured_count: 60,
            in_transit_count: 0,
            transported_count: 30,
            accepted_count: 0,
            installed_count: 0,
            rejected_count: 10,
            manufactured_released: 20,
            transported_released: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn to_bucket_maps_each_count_column() {
        let bucket = row().to_bucket();
        assert_eq!(bucket.total, 100);
        assert_eq!(bucket.count(ComponentStatus::Manufactured), 60);
        assert_eq!(bucket.count(ComponentStatus::Transported), 30);
        assert_eq!(bucket.count(ComponentStatus::Rejected), 10);
        assert!(!bucket.counts.contains_key(&ComponentStatus::Planning));
        assert_eq!(bucket.released(ComponentStatus::Manufactured), 20);
        assert!(!bucket.released.contains_key(&ComponentStatus::Transported));
    }

    #[test]
    fn response_flattens_bucket() {
        let json = serde_json::to_value(OtherComponentResponse::from(row())).unwrap();
        assert_eq!(json["total"], 100);
        assert_eq!(json["counts"]["transported"], 30);
        assert_eq!(json["released"]["manufactured"], 20);
        assert_eq!(json["name"], "Stair S-1");
    }

    #[test]
    fn transfer_dto_accepts_legacy_status_labels() {
        let t: TransferQuantity =
            serde_json::from_str(r#"{"from": "Fabrication", "to": "transported", "quantity": 5}"#)
                .unwrap();
        assert_eq!(t.from, ComponentStatus::Manufactured);
        assert_eq!(t.quantity, 5);
    }
}
