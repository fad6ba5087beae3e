//! Order analysis use case
//!
//! Takes one extracted transport order and produces the full analysis:
//! normalized cargo, resolved dates, the loading-meter evaluation of the
//! requested vehicle and the cheapest vehicle that fits.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ldm_domain::service::date_resolver::{resolve_date, DateResolution};
use ldm_domain::service::{evaluate, normalize_cargo, suggest, DefaultedField};
use ldm_domain::{CargoAnalysisResult, CargoItem, TransportOrder, VehicleKind, VehicleSuggestion};

use crate::config::Config;
use crate::order_validation::order_notices;
use crate::telemetry::{AnalysisEvent, LogTelemetry, NoopTelemetry, Telemetry};

/// Result of analyzing one transport order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAnalysis {
    pub analysis_id: Uuid,
    /// Date relative expressions were resolved against
    pub reference_date: NaiveDate,
    pub vehicle_requested: VehicleKind,
    pub pickup_postal_code: Option<String>,
    pub delivery_postal_code: Option<String>,
    /// ISO date, or the original text when it could not be resolved
    pub pickup_date: Option<String>,
    /// ISO date, or the original text when it could not be resolved
    pub delivery_date: Option<String>,
    pub is_urgent: bool,
    pub is_stackable: bool,
    pub cargo_items: Vec<CargoItem>,
    /// Cargo fields that were missing or invalid in the extracted order
    pub defaulted_fields: Vec<DefaultedField>,
    pub cargo_analysis: CargoAnalysisResult,
    pub vehicle_suggestion: VehicleSuggestion,
    pub notices: Vec<String>,
}

pub struct OrderAnalysisService {
    default_vehicle: VehicleKind,
    telemetry: Box<dyn Telemetry>,
}

impl OrderAnalysisService {
    pub fn new(default_vehicle: VehicleKind) -> Self {
        Self {
            default_vehicle,
            telemetry: Box::new(NoopTelemetry),
        }
    }

    /// Build a service from user configuration
    pub fn from_config(config: &Config) -> Self {
        let service = Self::new(config.default_vehicle_kind());
        if config.telemetry_enabled {
            service.with_telemetry(LogTelemetry)
        } else {
            service
        }
    }

    pub fn with_telemetry(mut self, telemetry: impl Telemetry + 'static) -> Self {
        self.telemetry = Box::new(telemetry);
        self
    }

    pub fn default_vehicle(&self) -> VehicleKind {
        self.default_vehicle
    }

    /// Analyze an order with dates resolved against today
    pub fn analyze_today(&self, order: &TransportOrder) -> OrderAnalysis {
        self.analyze(order, Local::now().date_naive())
    }

    /// Analyze an order with dates resolved against `reference_date`
    pub fn analyze(&self, order: &TransportOrder, reference_date: NaiveDate) -> OrderAnalysis {
        let analysis_id = Uuid::new_v4();
        let vehicle = order
            .vehicle_type
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map_or(self.default_vehicle, VehicleKind::from_identifier);

        let cargo = normalize_cargo(&order.cargo_items);
        if !cargo.is_complete() {
            log::warn!(
                "Order {}: {} cargo field(s) missing or invalid, defaulted",
                analysis_id,
                cargo.defaulted.len()
            );
        }
        for item_index in cargo.items_missing_footprint() {
            log::warn!(
                "Order {}: item {} has no length or width, evaluated as 0 cm",
                analysis_id,
                item_index + 1
            );
        }

        let cargo_analysis = evaluate(vehicle.profile(), &cargo.items);
        let vehicle_suggestion = suggest(&cargo.items);
        let notices = order_notices(order, &cargo.items);

        let pickup = order
            .pickup_date
            .as_deref()
            .map(|text| resolve_date(text, reference_date));
        let delivery = order
            .delivery_date
            .as_deref()
            .map(|text| resolve_date(text, reference_date));
        let unresolved_dates = [&pickup, &delivery]
            .into_iter()
            .flatten()
            .filter(|resolution| !resolution.is_resolved())
            .count();
        if unresolved_dates > 0 {
            log::warn!("Order {}: {} date field(s) left unresolved", analysis_id, unresolved_dates);
        }

        log::info!(
            "Order {}: {} LDM {:.2} ({}), suggested {}",
            analysis_id,
            vehicle,
            cargo_analysis.ldm,
            if cargo_analysis.fit_in_vehicle { "fits" } else { "does not fit" },
            vehicle_suggestion.identifier()
        );

        self.telemetry.record_analysis(&AnalysisEvent {
            analysis_id,
            vehicle,
            item_count: cargo.items.len(),
            ldm: cargo_analysis.ldm,
            fit_in_vehicle: cargo_analysis.fit_in_vehicle,
            warning_count: cargo_analysis.warnings.len(),
            suggested_vehicle: vehicle_suggestion.identifier().to_string(),
            defaulted_fields: cargo.defaulted.len(),
            unresolved_dates,
        });

        OrderAnalysis {
            analysis_id,
            reference_date,
            vehicle_requested: vehicle,
            pickup_postal_code: order.pickup_postal_code.clone(),
            delivery_postal_code: order.delivery_postal_code.clone(),
            pickup_date: pickup.as_ref().map(DateResolution::to_string),
            delivery_date: delivery.as_ref().map(DateResolution::to_string),
            is_urgent: order.is_urgent,
            is_stackable: order.is_stackable,
            cargo_items: cargo.items,
            defaulted_fields: cargo.defaulted,
            cargo_analysis,
            vehicle_suggestion,
            notices,
        }
    }
}

impl Default for OrderAnalysisService {
    fn default() -> Self {
        Self::new(VehicleKind::default())
    }
}
