//! Telemetry seam for order analyses
//!
//! The service reports every analysis to an injected [`Telemetry`] sink.
//! [`NoopTelemetry`] discards events; [`LogTelemetry`] writes them as JSON to
//! the `ldm_checker::telemetry` log target for a forwarder to pick up.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ldm_domain::VehicleKind;

/// Summary of one order analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisEvent {
    pub analysis_id: Uuid,
    pub vehicle: VehicleKind,
    pub item_count: usize,
    pub ldm: f64,
    pub fit_in_vehicle: bool,
    pub warning_count: usize,
    pub suggested_vehicle: String,
    pub defaulted_fields: usize,
    pub unresolved_dates: usize,
}

pub trait Telemetry: Send + Sync {
    fn record_analysis(&self, event: &AnalysisEvent);
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record_analysis(&self, _event: &AnalysisEvent) {}
}

/// Writes events to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTelemetry;

pub const TELEMETRY_TARGET: &str = "ldm_checker::telemetry";

impl Telemetry for LogTelemetry {
    fn record_analysis(&self, event: &AnalysisEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!(target: TELEMETRY_TARGET, "{}", json),
            Err(e) => log::warn!(target: TELEMETRY_TARGET, "Failed to encode event: {}", e),
        }
    }
}
