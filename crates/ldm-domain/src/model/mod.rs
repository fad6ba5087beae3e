//! Domain model types

pub mod analysis;
pub mod cargo;
pub mod order;
pub mod vehicle;

pub use analysis::{
    round2, CargoAnalysisResult, CargoWarning, VehicleSuggestion, NO_VEHICLE,
    UNDERUTILIZATION_RATIO,
};
pub use cargo::{CargoField, CargoItem, RawCargoItem};
pub use order::TransportOrder;
pub use vehicle::{VehicleKind, VehicleProfile};
