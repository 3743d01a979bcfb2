//! Component entity model and DTOs.

use precast_core::component::Dimensions;
use precast_core::status::ComponentStatus;
use precast_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A component row from the `components` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Component {
    pub id: DbId,
    pub section_id: DbId,
    pub name: String,
    pub component_type: String,
    pub width: Decimal,
    pub height: Decimal,
    pub thickness: Decimal,
    pub extension: Decimal,
    pub reduction: Decimal,
    pub area: Decimal,
    pub volume: Decimal,
    pub weight: Decimal,
    #[serde(
        rename = "status",
        serialize_with = "crate::models::status::serialize_component_status"
    )]
    pub status_id: StatusId,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Component {
    /// The stored status, or `None` if the row holds an unseeded id.
    pub fn status(&self) -> Option<ComponentStatus> {
        ComponentStatus::from_id(self.status_id)
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
            thickness: self.thickness,
            extension: self.extension,
            reduction: self.reduction,
            area: self.area,
            volume: self.volume,
            weight: self.weight,
        }
    }
}

/// DTO for creating a component. `section_id` is taken from the URL and
/// the status always starts at `planning`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComponent {
    #[serde(default)]
    pub section_id: DbId,
    pub name: String,
    pub component_type: String,
    pub width: Decimal,
    pub height: Decimal,
    pub thickness: Decimal,
    pub extension: Decimal,
    pub reduction: Decimal,
    pub area: Decimal,
    pub volume: Decimal,
    pub weight: Decimal,
}

impl CreateComponent {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
            thickness: self.thickness,
            extension: self.extension,
            reduction: self.reduction,
            area: self.area,
            volume: self.volume,
            weight: self.weight,
        }
    }
}

/// DTO for updating a component. Status is deliberately absent: it only
/// changes through `ComponentRepo::transition`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComponent {
    pub name: Option<String>,
    pub component_type: Option<String>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub thickness: Option<Decimal>,
    pub extension: Option<Decimal>,
    pub reduction: Option<Decimal>,
    pub area: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub weight: Option<Decimal>,
}

impl UpdateComponent {
    /// `(field, value)` pairs for every dimension, for per-field validation.
    pub fn dimension_fields(&self) -> [(&'static str, Option<Decimal>); 8] {
        [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("extension", self.extension),
            ("reduction", self.reduction),
            ("area", self.area),
            ("volume", self.volume),
            ("weight", self.weight),
        ]
    }
}
