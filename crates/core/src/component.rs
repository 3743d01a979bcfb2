//! Component attributes and their validation.
//!
//! Dimensions: width, height, thickness in mm; extension, reduction and area
//! in m²; volume in m³; weight in tons. Every one of them must be strictly
//! positive.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Maximum length for component names and type labels (characters).
pub const MAX_NAME_LENGTH: usize = 255;

/// Physical attributes of a precast component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Dimensions {
    #[validate(custom(function = "validate_positive_decimal"))]
    pub width: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub height: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub thickness: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub extension: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub reduction: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub area: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub volume: Decimal,
    #[validate(custom(function = "validate_positive_decimal"))]
    pub weight: Decimal,
}

/// Identifying fields entered on the component form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ComponentLabel {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub component_type: String,
}

fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than zero".into());
        Err(err)
    }
}

/// Validate a full set of dimensions.
pub fn validate_dimensions(dimensions: &Dimensions) -> Result<(), CoreError> {
    dimensions
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}

/// Validate the name and type label of a component.
pub fn validate_label(name: &str, component_type: &str) -> Result<(), CoreError> {
    ComponentLabel {
        name: name.to_string(),
        component_type: component_type.to_string(),
    }
    .validate()
    .map_err(|e| CoreError::Validation(e.to_string()))
}

/// Validate a single optional dimension from a partial update.
pub fn validate_optional_dimension(field: &str, value: Option<Decimal>) -> Result<(), CoreError> {
    match value {
        Some(v) if validate_positive_decimal(&v).is_err() => Err(CoreError::Validation(format!(
            "{field} must be greater than zero (got {v})"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> Dimensions {
        Dimensions {
            width: dec!(3000),
            height: dec!(2800),
            thickness: dec!(150),
            extension: dec!(0.5),
            reduction: dec!(0.25),
            area: dec!(8.4),
            volume: dec!(1.26),
            weight: dec!(3.02),
        }
    }

    #[test]
    fn positive_dimensions_pass() {
        assert!(validate_dimensions(&sample()).is_ok());
    }

    #[test]
    fn zero_dimension_fails() {
        let dims = Dimensions {
            thickness: Decimal::ZERO,
            ..sample()
        };
        assert_matches!(
            validate_dimensions(&dims),
            Err(CoreError::Validation(msg)) if msg.contains("thickness")
        );
    }

    #[test]
    fn negative_dimension_fails() {
        let dims = Dimensions {
            weight: dec!(-1),
            ..sample()
        };
        assert!(validate_dimensions(&dims).is_err());
    }

    #[test]
    fn empty_name_fails() {
        assert!(validate_label("", "Type A-Precast").is_err());
        assert!(validate_label("W-01", "").is_err());
        assert!(validate_label("W-01", "Type A-Precast").is_ok());
    }

    #[test]
    fn overlong_name_fails() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_label(&name, "Type A-Precast").is_err());
    }

    #[test]
    fn optional_dimension_checks_only_present_values() {
        assert!(validate_optional_dimension("width", None).is_ok());
        assert!(validate_optional_dimension("width", Some(dec!(1))).is_ok());
        assert!(validate_optional_dimension("width", Some(dec!(0))).is_err());
    }

    #[test]
    fn dimensions_accept_numbers_and_strings() {
        let json = serde_json::json!({
            "width": 3000, "height": "2800", "thickness": 150,
            "extension": "0.5", "reduction": "0.25", "area": "8.4",
            "volume": "1.26", "weight": "3.02"
        });
        let dims: Dimensions = serde_json::from_value(json).unwrap();
        assert_eq!(dims, sample());
    }
}
