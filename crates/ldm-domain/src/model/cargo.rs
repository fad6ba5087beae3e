//! Cargo item definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A group of identical cargo pieces, fully specified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    /// Piece length in meters
    pub length_m: f64,
    /// Piece width in meters
    pub width_m: f64,
    /// Piece height in meters
    pub height_m: f64,
    /// Number of identical pieces
    pub quantity: u32,
    /// Weight of a single piece in kilograms
    #[serde(default)]
    pub weight_kg: f64,
}

impl CargoItem {
    pub fn new(length_m: f64, width_m: f64, height_m: f64, quantity: u32) -> Self {
        Self {
            length_m,
            width_m,
            height_m,
            quantity,
            weight_kg: 0.0,
        }
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Combined weight of all pieces
    pub fn total_weight_kg(&self) -> f64 {
        self.weight_kg * f64::from(self.quantity)
    }
}

/// Cargo record as produced by the extraction step.
///
/// Every field may be missing, null, a number or a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCargoItem {
    #[serde(default, alias = "length_m")]
    pub length: Option<Value>,
    #[serde(default, alias = "width_m")]
    pub width: Option<Value>,
    #[serde(default, alias = "height_m")]
    pub height: Option<Value>,
    #[serde(default, alias = "count")]
    pub quantity: Option<Value>,
    #[serde(default, alias = "weight_kg")]
    pub weight: Option<Value>,
}

/// Field of a cargo record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CargoField {
    Length,
    Width,
    Height,
    Quantity,
    Weight,
}

impl std::fmt::Display for CargoField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CargoField::Length => write!(f, "length"),
            CargoField::Width => write!(f, "width"),
            CargoField::Height => write!(f, "height"),
            CargoField::Quantity => write!(f, "quantity"),
            CargoField::Weight => write!(f, "weight"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_weight() {
        let item = CargoItem::new(1.2, 0.8, 1.0, 4).with_weight(250.0);
        assert!((item.total_weight_kg() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_raw_item_accepts_mixed_values() {
        let raw: RawCargoItem = serde_json::from_str(
            r#"{"length": 1.2, "width": "0,8", "height": null, "count": 3}"#,
        )
        .unwrap();
        assert_eq!(raw.length, Some(serde_json::json!(1.2)));
        assert_eq!(raw.width, Some(serde_json::json!("0,8")));
        assert_eq!(raw.height, None);
        assert_eq!(raw.quantity, Some(serde_json::json!(3)));
        assert!(raw.weight.is_none());
    }
}
