//! Cargo analysis result types

use serde::{Deserialize, Serialize};

use super::VehicleKind;

/// Identifier reported when no vehicle can carry the cargo
pub const NO_VEHICLE: &str = "brak";

/// Share of a vehicle's loading meters below which the load counts as under-filled
pub const UNDERUTILIZATION_RATIO: f64 = 0.8;

/// Advisory or blocking finding of a cargo evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum CargoWarning {
    /// No cargo supplied; the vehicle's full capacity is reported
    NoCargoData,
    HeightExceeded { height_cm: f64, limit_cm: f64 },
    /// Wider than the vehicle in both orientations
    TooWide,
    LdmExceeded {
        ldm: f64,
        max_ldm: f64,
        vehicle: VehicleKind,
    },
    WeightExceeded {
        weight_kg: f64,
        max_weight_kg: f64,
        vehicle: VehicleKind,
    },
    Underutilized,
}

impl CargoWarning {
    /// Whether this finding rules the vehicle out
    pub fn is_blocking(&self) -> bool {
        match self {
            CargoWarning::NoCargoData | CargoWarning::Underutilized => false,
            CargoWarning::HeightExceeded { .. }
            | CargoWarning::TooWide
            | CargoWarning::LdmExceeded { .. }
            | CargoWarning::WeightExceeded { .. } => true,
        }
    }
}

impl std::fmt::Display for CargoWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CargoWarning::NoCargoData => write!(
                f,
                "Brak danych o ładunku. Zwracamy maksymalny LDM dla podanego pojazdu."
            ),
            CargoWarning::HeightExceeded {
                height_cm,
                limit_cm,
            } => write!(
                f,
                "Ładunek o wysokości {} cm przekracza wysokość pojazdu ({} cm).",
                Measured(round2(*height_cm)),
                limit_cm
            ),
            CargoWarning::TooWide => {
                write!(f, "Ładunek jest zbyt szeroki, by zmieścić się w pojeździe.")
            }
            CargoWarning::LdmExceeded {
                ldm,
                max_ldm,
                vehicle,
            } => write!(
                f,
                "Łączna długość LDM ({}) przekracza maksymalną dla {} ({}).",
                Measured(round2(*ldm)),
                vehicle,
                max_ldm
            ),
            CargoWarning::WeightExceeded {
                weight_kg,
                max_weight_kg,
                vehicle,
            } => write!(
                f,
                "Łączna waga ładunku ({} kg) przekracza maksymalną dla {} ({} kg).",
                round2(*weight_kg),
                vehicle,
                max_weight_kg
            ),
            CargoWarning::Underutilized => write!(
                f,
                "Zajmujesz mniej niż 80% przestrzeni pojazdu – rozważ wybór opcji 'dowolny typ pojazdu'."
            ),
        }
    }
}

/// Measured value in a warning text, always printed with a fractional part
struct Measured(f64);

impl std::fmt::Display for Measured {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Outcome of evaluating one vehicle against a cargo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoAnalysisResult {
    /// Total loading meters, rounded to two decimals
    pub ldm: f64,
    /// Loading meters available in the evaluated vehicle
    pub max_ldm: f64,
    pub fit_in_vehicle: bool,
    /// Findings in the order they were raised
    pub warnings: Vec<String>,
    pub total_weight_kg: f64,
    pub vehicle_used: VehicleKind,
    pub vehicle_suggestion: VehicleKind,
}

/// Cheapest vehicle able to carry a cargo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSuggestion {
    /// `None` when no vehicle fits, serialized as `"brak"`
    #[serde(with = "suggested_vehicle")]
    pub vehicle: Option<VehicleKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VehicleSuggestion {
    pub fn vehicle(kind: VehicleKind) -> Self {
        Self {
            vehicle: Some(kind),
            reason: None,
        }
    }

    pub fn none(reason: impl Into<String>) -> Self {
        Self {
            vehicle: None,
            reason: Some(reason.into()),
        }
    }

    /// Wire identifier, `"brak"` when nothing fits
    pub fn identifier(&self) -> &'static str {
        self.vehicle.map_or(NO_VEHICLE, |v| v.identifier())
    }
}

mod suggested_vehicle {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{VehicleKind, NO_VEHICLE};

    pub fn serialize<S>(value: &Option<VehicleKind>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map_or(NO_VEHICLE, |v| v.identifier()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<VehicleKind>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let identifier = String::deserialize(deserializer)?;
        if identifier.trim().eq_ignore_ascii_case(NO_VEHICLE) {
            Ok(None)
        } else {
            Ok(Some(VehicleKind::from_identifier(&identifier)))
        }
    }
}
