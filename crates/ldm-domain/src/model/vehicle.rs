//! Vehicle-related type definitions

use serde::{Deserialize, Serialize};

use crate::catalog::VEHICLE_CATALOG;

/// Vehicle class offered for a transport order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    /// Delivery van, up to 1.5 t
    #[serde(rename = "bus")]
    Bus,
    /// Rigid truck (solówka), up to 9 t
    #[serde(rename = "solówka", alias = "solowka", alias = "solo")]
    Solo,
    /// Semi-trailer (naczepa), up to 24 t
    #[default]
    #[serde(rename = "naczepa", alias = "trailer")]
    Trailer,
}

impl VehicleKind {
    /// Catalog order, smallest vehicle first
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Bus, VehicleKind::Solo, VehicleKind::Trailer];

    /// Wire identifier used in results and warnings
    pub fn identifier(&self) -> &'static str {
        match self {
            VehicleKind::Bus => "bus",
            VehicleKind::Solo => "solówka",
            VehicleKind::Trailer => "naczepa",
        }
    }

    /// Map any identifier onto a vehicle class.
    ///
    /// Accepts the current identifiers, ASCII spellings, English names and
    /// enum-style reprs such as `VehicleType.SOLO`. Anything else, including
    /// an empty string, resolves to [`VehicleKind::Trailer`].
    pub fn from_identifier(identifier: &str) -> Self {
        let normalized = identifier.trim().to_lowercase();
        let normalized = normalized
            .strip_prefix("vehicletype.")
            .unwrap_or(&normalized);

        match normalized {
            "bus" => VehicleKind::Bus,
            "solówka" | "solowka" | "solo" => VehicleKind::Solo,
            _ => VehicleKind::Trailer,
        }
    }

    /// Static profile for this vehicle class
    pub fn profile(&self) -> &'static VehicleProfile {
        match self {
            VehicleKind::Bus => &VEHICLE_CATALOG[0],
            VehicleKind::Solo => &VEHICLE_CATALOG[1],
            VehicleKind::Trailer => &VEHICLE_CATALOG[2],
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Physical and capacity limits of a vehicle class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub kind: VehicleKind,
    /// Cargo space length in centimeters
    pub length_cm: f64,
    /// Cargo space width in centimeters
    pub width_cm: f64,
    /// Cargo space height in centimeters
    pub height_cm: f64,
    /// Loading meters available
    pub max_ldm: f64,
    /// Maximum payload in kilograms
    pub max_weight_kg: f64,
}
