//! QR payload carried on printed component labels.
//!
//! The symbol encodes a flat JSON object:
//!
//! ```json
//! { "project": 1, "section": 4, "name": "W-01", "type": "Type A-Precast",
//!   "width": "3000", "height": "2800", "thickness": "150",
//!   "extension": "0.5", "reduction": "0.25", "area": "8.4",
//!   "volume": "1.26", "weight": "3.02", "status": "planning" }
//! ```
//!
//! Rendering and reading the QR image itself happens in the browser. The
//! `status` field is informational: a scan resolves the component by
//! `(section, name)` and always validates against the stored status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::component::{validate_dimensions, validate_label, Dimensions};
use crate::error::CoreError;
use crate::status::ComponentStatus;
use crate::types::DbId;

/// Decoded QR payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub project: DbId,
    pub section: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub width: Decimal,
    pub height: Decimal,
    pub thickness: Decimal,
    pub extension: Decimal,
    pub reduction: Decimal,
    pub area: Decimal,
    pub volume: Decimal,
    pub weight: Decimal,
    pub status: ComponentStatus,
}

impl QrPayload {
    pub fn new(
        project: DbId,
        section: DbId,
        name: impl Into<String>,
        component_type: impl Into<String>,
        dimensions: &Dimensions,
        status: ComponentStatus,
    ) -> Self {
        Self {
            project,
            section,
            name: name.into(),
            component_type: component_type.into(),
            width: dimensions.width,
            height: dimensions.height,
            thickness: dimensions.thickness,
            extension: dimensions.extension,
            reduction: dimensions.reduction,
            area: dimensions.area,
            volume: dimensions.volume,
            weight: dimensions.weight,
            status,
        }
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

    /// Serialize to the JSON string embedded in the QR symbol.
    pub fn encode(&self) -> Result<String, CoreError> {
        serde_json::to_string(self)
            .map_err(|e| CoreError::Internal(format!("Failed to encode QR payload: {e}")))
    }

    /// Parse and validate a scanned QR string.
    pub fn decode(raw: &str) -> Result<Self, CoreError> {
        let payload: Self = serde_json::from_str(raw.trim())
            .map_err(|e| CoreError::Validation(format!("Malformed QR payload: {e}")))?;
        validate_label(&payload.name, &payload.component_type)?;
        validate_dimensions(&payload.dimensions())?;
        Ok(payload)
    }
}
