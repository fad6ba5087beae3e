//! Domain layer for ldm-checker
//!
//! Vehicle catalog, cargo model, and the pure services that evaluate
//! loading meters, pick a vehicle and resolve relative dates.

pub mod catalog;
pub mod model;
pub mod service;

pub use catalog::{lookup, VEHICLE_CATALOG};
pub use model::*;
