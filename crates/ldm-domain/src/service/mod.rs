//! Domain services

pub mod cargo_normalizer;
pub mod date_resolver;
pub mod ldm_calculator;
pub mod vehicle_selector;

pub use cargo_normalizer::{normalize_cargo, DefaultedField, NormalizedCargo};
pub use date_resolver::{resolve, resolve_date, resolve_from_today, DateResolution};
pub use ldm_calculator::{evaluate, evaluate_vehicle};
pub use vehicle_selector::{evaluate_all, suggest};
