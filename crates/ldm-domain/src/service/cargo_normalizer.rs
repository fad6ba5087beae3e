//! Normalization of extracted cargo records
//!
//! Extraction output is unreliable: numbers may arrive as strings (with a
//! decimal comma), as null, or not at all. Every record is turned into a
//! complete [`CargoItem`] and each substituted field is reported.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{CargoField, CargoItem, RawCargoItem};

/// Quantity used when the record has no usable piece count
pub const DEFAULT_QUANTITY: u32 = 1;

/// A field that was missing or invalid and got a default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultedField {
    /// Position of the record in the extracted list
    pub item_index: usize,
    pub field: CargoField,
}

/// Cargo list ready for evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCargo {
    pub items: Vec<CargoItem>,
    pub defaulted: Vec<DefaultedField>,
}

impl NormalizedCargo {
    pub fn is_complete(&self) -> bool {
        self.defaulted.is_empty()
    }

    /// Indices of items whose length or width was defaulted to 0.
    ///
    /// Such items can be reported as too wide although the real cause is
    /// missing data.
    pub fn items_missing_footprint(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .defaulted
            .iter()
            .filter(|d| matches!(d.field, CargoField::Length | CargoField::Width))
            .map(|d| d.item_index)
            .collect();
        indices.dedup();
        indices
    }
}

/// Normalize one record, returning the fields that were defaulted
pub fn normalize_item(raw: &RawCargoItem) -> (CargoItem, Vec<CargoField>) {
    let mut defaulted = Vec::new();
    let mut dimension = |value: &Option<Value>, field: CargoField| {
        coerce_non_negative(value.as_ref()).unwrap_or_else(|| {
            defaulted.push(field);
            0.0
        })
    };

    let length_m = dimension(&raw.length, CargoField::Length);
    let width_m = dimension(&raw.width, CargoField::Width);
    let height_m = dimension(&raw.height, CargoField::Height);
    let weight_kg = dimension(&raw.weight, CargoField::Weight);

    let quantity = coerce_quantity(raw.quantity.as_ref()).unwrap_or_else(|| {
        defaulted.push(CargoField::Quantity);
        DEFAULT_QUANTITY
    });

    let item = CargoItem {
        length_m,
        width_m,
        height_m,
        quantity,
        weight_kg,
    };
    (item, defaulted)
}

/// Normalize an extracted cargo list
pub fn normalize_cargo(raw_items: &[RawCargoItem]) -> NormalizedCargo {
    let mut normalized = NormalizedCargo::default();

    for (item_index, raw) in raw_items.iter().enumerate() {
        let (item, fields) = normalize_item(raw);
        for field in fields {
            log::debug!("Cargo item {}: {} missing or invalid, defaulted", item_index, field);
            normalized.defaulted.push(DefaultedField { item_index, field });
        }
        normalized.items.push(item);
    }

    normalized
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn coerce_non_negative(value: Option<&Value>) -> Option<f64> {
    coerce_number(value).filter(|n| *n >= 0.0)
}

fn coerce_quantity(value: Option<&Value>) -> Option<u32> {
    coerce_number(value)
        .filter(|n| *n >= 1.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawCargoItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_record() {
        let (item, defaulted) = normalize_item(&raw(json!({
            "length": 1.2, "width": 0.8, "height": 1.5, "quantity": 4, "weight": 250
        })));
        assert!(defaulted.is_empty());
        assert_eq!(item, CargoItem::new(1.2, 0.8, 1.5, 4).with_weight(250.0));
    }

    #[test]
    fn test_numeric_strings_with_decimal_comma() {
        let (item, defaulted) = normalize_item(&raw(json!({
            "length": "1,2", "width": " 0.8 ", "height": "2", "quantity": "3"
        })));
        assert_eq!(defaulted, vec![CargoField::Weight]);
        assert!((item.length_m - 1.2).abs() < f64::EPSILON);
        assert!((item.width_m - 0.8).abs() < f64::EPSILON);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_missing_and_invalid_fields_defaulted() {
        let (item, defaulted) = normalize_item(&raw(json!({
            "length": null, "width": "szeroki", "height": -1.0, "quantity": 0
        })));
        assert_eq!(item.length_m, 0.0);
        assert_eq!(item.width_m, 0.0);
        assert_eq!(item.height_m, 0.0);
        assert_eq!(item.quantity, DEFAULT_QUANTITY);
        assert_eq!(
            defaulted,
            vec![
                CargoField::Length,
                CargoField::Width,
                CargoField::Height,
                CargoField::Weight,
                CargoField::Quantity,
            ]
        );
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        let (item, defaulted) = normalize_item(&raw(json!({
            "length": 1, "width": 1, "height": 1, "quantity": 2.5, "weight": 10
        })));
        assert_eq!(item.quantity, DEFAULT_QUANTITY);
        assert_eq!(defaulted, vec![CargoField::Quantity]);
    }

    #[test]
    fn test_normalize_cargo_reports_indices() {
        let cargo = normalize_cargo(&[
            raw(json!({"length": 1, "width": 1, "height": 1, "quantity": 1, "weight": 5})),
            raw(json!({"length": 1, "width": 1, "quantity": 2, "weight": 5})),
        ]);
        assert_eq!(cargo.items.len(), 2);
        assert!(!cargo.is_complete());
        assert_eq!(
            cargo.defaulted,
            vec![DefaultedField {
                item_index: 1,
                field: CargoField::Height
            }]
        );
    }

    #[test]
    fn test_items_missing_footprint() {
        let cargo = normalize_cargo(&[
            raw(json!({"height": 1, "quantity": 1, "weight": 5})),
            raw(json!({"length": 1, "width": 1, "quantity": 2})),
            raw(json!({"length": 1, "height": 1, "quantity": 2, "weight": 5})),
        ]);
        assert_eq!(cargo.items_missing_footprint(), vec![0, 2]);
    }
}
