//! Application layer for ldm-checker
//!
//! Wires the domain services into a single order analysis and owns the
//! user configuration and the telemetry seam.

pub mod analysis_service;
pub mod config;
pub mod order_validation;
pub mod telemetry;

pub use analysis_service::{OrderAnalysis, OrderAnalysisService};
pub use config::Config;
pub use telemetry::{AnalysisEvent, LogTelemetry, NoopTelemetry, Telemetry};
