//! Extracted transport order

use serde::{Deserialize, Deserializer, Serialize};

use super::RawCargoItem;

/// Deserialize null as default value
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Transport order as produced by the text extraction step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportOrder {
    #[serde(default, deserialize_with = "null_to_default")]
    pub cargo_items: Vec<RawCargoItem>,

    /// Requested vehicle identifier ("bus", "solówka", "naczepa")
    #[serde(default)]
    pub vehicle_type: Option<String>,

    #[serde(default)]
    pub pickup_postal_code: Option<String>,

    #[serde(default)]
    pub delivery_postal_code: Option<String>,

    /// Free-text or ISO pickup date
    #[serde(default)]
    pub pickup_date: Option<String>,

    /// Free-text or ISO delivery date
    #[serde(default)]
    pub delivery_date: Option<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub is_urgent: bool,

    #[serde(default, deserialize_with = "null_to_default")]
    pub is_stackable: bool,
}
