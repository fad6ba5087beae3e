//! Loading-meter evaluation of a cargo list against one vehicle

use crate::catalog::lookup;
use crate::model::{
    round2, CargoAnalysisResult, CargoItem, CargoWarning, VehicleKind, VehicleProfile,
    UNDERUTILIZATION_RATIO,
};

/// Floor placement of one cargo item in a chosen orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Footprint along the vehicle's length
    pub length_cm: f64,
    /// Footprint across the vehicle's width
    pub width_cm: f64,
    pub pieces_per_row: u32,
    pub rows: u32,
    /// Floor length taken by all rows
    pub ldm_cm: f64,
}

impl Placement {
    pub fn ldm_m(&self) -> f64 {
        self.ldm_cm / 100.0
    }
}

/// Convert meters to centimeters, rounded to 1/1000 cm.
///
/// Keeps values such as 0.3 m at exactly 30 cm so row counts are not lost to
/// binary representation error.
pub fn meters_to_cm(meters: f64) -> f64 {
    round_cm(meters * 100.0)
}

fn round_cm(cm: f64) -> f64 {
    (cm * 1000.0).round() / 1000.0
}

/// Place `quantity` pieces in rows across a floor `floor_width_cm` wide.
///
/// Returns `None` when a single piece is wider than the floor.
pub fn place_rows(
    floor_width_cm: f64,
    length_cm: f64,
    width_cm: f64,
    quantity: u32,
) -> Option<Placement> {
    if width_cm <= 0.0 {
        return None;
    }
    let pieces_per_row = (floor_width_cm / width_cm).floor() as u32;
    if pieces_per_row == 0 {
        return None;
    }

    let full_rows = quantity / pieces_per_row;
    let leftover = quantity % pieces_per_row;
    let rows = full_rows + u32::from(leftover > 0);

    Some(Placement {
        length_cm,
        width_cm,
        pieces_per_row,
        rows,
        ldm_cm: f64::from(rows) * length_cm,
    })
}

/// Pick the orientation taking the least floor length.
///
/// The footprint as given is tried first, then rotated by 90°; on an exact
/// tie the first one is kept.
pub fn best_placement(
    floor_width_cm: f64,
    length_cm: f64,
    width_cm: f64,
    quantity: u32,
) -> Option<Placement> {
    [(length_cm, width_cm), (width_cm, length_cm)]
        .into_iter()
        .filter_map(|(l, w)| place_rows(floor_width_cm, l, w, quantity))
        .fold(None, |best: Option<Placement>, candidate| match best {
            Some(b) if b.ldm_cm <= candidate.ldm_cm => Some(b),
            _ => Some(candidate),
        })
}

/// Evaluate a cargo list against a vehicle profile
pub fn evaluate(vehicle: &VehicleProfile, items: &[CargoItem]) -> CargoAnalysisResult {
    if items.is_empty() {
        log::debug!("{}: no cargo data, reporting full capacity", vehicle.kind);
        return AnalysisBuilder::new(vehicle)
            .add_load(vehicle.max_ldm * 100.0, 0.0)
            .warn(CargoWarning::NoCargoData)
            .finish();
    }

    items
        .iter()
        .fold(AnalysisBuilder::new(vehicle), AnalysisBuilder::place)
        .check_limits()
        .finish()
}

/// Evaluate a cargo list against the vehicle named by `identifier`
pub fn evaluate_vehicle(identifier: &str, items: &[CargoItem]) -> CargoAnalysisResult {
    evaluate(lookup(identifier), items)
}

/// Accumulates loads and findings for one evaluation
struct AnalysisBuilder<'a> {
    vehicle: &'a VehicleProfile,
    /// Summed in centimeters; meters are derived once and rounded
    total_ldm_cm: f64,
    total_weight_kg: f64,
    warnings: Vec<CargoWarning>,
}

impl<'a> AnalysisBuilder<'a> {
    fn new(vehicle: &'a VehicleProfile) -> Self {
        Self {
            vehicle,
            total_ldm_cm: 0.0,
            total_weight_kg: 0.0,
            warnings: Vec::new(),
        }
    }

    fn warn(mut self, warning: CargoWarning) -> Self {
        log::debug!("{}: {}", self.vehicle.kind, warning);
        self.warnings.push(warning);
        self
    }

    fn add_load(mut self, ldm_cm: f64, weight_kg: f64) -> Self {
        self.total_ldm_cm += ldm_cm;
        self.total_weight_kg += weight_kg;
        self
    }

    fn place(self, item: &CargoItem) -> Self {
        let vehicle = self.vehicle;
        let height_cm = meters_to_cm(item.height_m);

        // Height failure does not skip packing.
        let builder = if height_cm > vehicle.height_cm {
            self.warn(CargoWarning::HeightExceeded {
                height_cm,
                limit_cm: vehicle.height_cm,
            })
        } else {
            self
        };

        match best_placement(
            vehicle.width_cm,
            meters_to_cm(item.length_m),
            meters_to_cm(item.width_m),
            item.quantity,
        ) {
            Some(placement) => {
                log::debug!(
                    "{}: {} x {} cm, {} per row, {} rows, {:.2} LDM",
                    vehicle.kind,
                    placement.length_cm,
                    placement.width_cm,
                    placement.pieces_per_row,
                    placement.rows,
                    placement.ldm_m()
                );
                builder.add_load(placement.ldm_cm, item.total_weight_kg())
            }
            None => builder.warn(CargoWarning::TooWide),
        }
    }

    fn check_limits(self) -> Self {
        let vehicle = self.vehicle;
        let total_cm = round_cm(self.total_ldm_cm);
        let total_ldm = self.total_ldm_m();
        let total_weight = self.total_weight_kg;
        let mut builder = self;

        if total_cm > meters_to_cm(vehicle.max_ldm) {
            builder = builder.warn(CargoWarning::LdmExceeded {
                ldm: total_ldm,
                max_ldm: vehicle.max_ldm,
                vehicle: vehicle.kind,
            });
        }
        if total_weight > vehicle.max_weight_kg {
            builder = builder.warn(CargoWarning::WeightExceeded {
                weight_kg: total_weight,
                max_weight_kg: vehicle.max_weight_kg,
                vehicle: vehicle.kind,
            });
        }
        if total_cm > 0.0 && total_cm < meters_to_cm(UNDERUTILIZATION_RATIO * vehicle.max_ldm) {
            builder = builder.warn(CargoWarning::Underutilized);
        }
        builder
    }

    fn total_ldm_m(&self) -> f64 {
        round2(self.total_ldm_cm / 100.0)
    }

    fn finish(self) -> CargoAnalysisResult {
        let fit_in_vehicle = !self.warnings.iter().any(CargoWarning::is_blocking);
        let vehicle_used = self.vehicle.kind;

        CargoAnalysisResult {
            ldm: self.total_ldm_m(),
            max_ldm: self.vehicle.max_ldm,
            fit_in_vehicle,
            warnings: self.warnings.iter().map(ToString::to_string).collect(),
            total_weight_kg: self.total_weight_kg,
            vehicle_used,
            vehicle_suggestion: if fit_in_vehicle {
                vehicle_used
            } else {
                VehicleKind::Trailer
            },
        }
    }
}
