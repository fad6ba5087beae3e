//! Vehicle catalog for the three offered vehicle classes

use crate::model::{VehicleKind, VehicleProfile};

/// Standard vehicle profiles, in [`VehicleKind::ALL`] order
pub static VEHICLE_CATALOG: [VehicleProfile; 3] = [
    VehicleProfile {
        kind: VehicleKind::Bus,
        length_cm: 450.0,
        width_cm: 240.0,
        height_cm: 260.0,
        max_ldm: 4.5,
        max_weight_kg: 1500.0,
    },
    VehicleProfile {
        kind: VehicleKind::Solo,
        length_cm: 730.0,
        width_cm: 240.0,
        height_cm: 260.0,
        max_ldm: 7.3,
        max_weight_kg: 9000.0,
    },
    VehicleProfile {
        kind: VehicleKind::Trailer,
        length_cm: 1360.0,
        width_cm: 240.0,
        height_cm: 260.0,
        max_ldm: 13.6,
        max_weight_kg: 24000.0,
    },
];

/// Get vehicle profile by identifier, falling back to the trailer
pub fn lookup(identifier: &str) -> &'static VehicleProfile {
    VehicleKind::from_identifier(identifier).profile()
}
