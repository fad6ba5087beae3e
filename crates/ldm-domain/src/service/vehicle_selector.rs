//! Vehicle selection across the catalog

use crate::model::{CargoAnalysisResult, CargoItem, VehicleKind, VehicleSuggestion};

use super::ldm_calculator::evaluate;

/// Reason reported when no vehicle can carry the cargo
pub const NO_VEHICLE_REASON: &str = "Żaden pojazd nie mieści ładunku";

/// Evaluate the cargo against every catalog vehicle, smallest first
pub fn evaluate_all(items: &[CargoItem]) -> Vec<CargoAnalysisResult> {
    VehicleKind::ALL
        .iter()
        .map(|kind| evaluate(kind.profile(), items))
        .collect()
}

/// Suggest the fitting vehicle with the smallest loading meters.
///
/// Ties go to the smaller vehicle.
pub fn suggest(items: &[CargoItem]) -> VehicleSuggestion {
    let best = evaluate_all(items)
        .into_iter()
        .filter(|result| result.fit_in_vehicle)
        .min_by(|a, b| a.ldm.total_cmp(&b.ldm));

    match best {
        Some(result) => {
            log::debug!("Suggested vehicle: {} ({} LDM)", result.vehicle_used, result.ldm);
            VehicleSuggestion::vehicle(result.vehicle_used)
        }
        None => {
            log::debug!("No vehicle fits {} cargo item(s)", items.len());
            VehicleSuggestion::none(NO_VEHICLE_REASON)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cargo_suggests_bus() {
        let cargo = vec![CargoItem::new(0.8, 1.0, 2.0, 4).with_weight(200.0)];
        let suggestion = suggest(&cargo);
        assert_eq!(suggestion.vehicle, Some(VehicleKind::Bus));
        assert_eq!(suggestion.identifier(), "bus");
        assert!(suggestion.reason.is_none());
    }

    #[test]
    fn test_heavy_cargo_suggests_solo() {
        let cargo = vec![CargoItem::new(1.2, 0.8, 1.5, 10).with_weight(500.0)];
        assert_eq!(suggest(&cargo).vehicle, Some(VehicleKind::Solo));
    }

    #[test]
    fn test_only_trailer_fits() {
        // 20 t exceeds the solo payload
        let cargo = vec![CargoItem::new(1.2, 0.8, 1.5, 20).with_weight(1000.0)];
        let suggestion = suggest(&cargo);
        assert_eq!(suggestion.vehicle, Some(VehicleKind::Trailer));
        assert_eq!(suggestion.identifier(), "naczepa");
    }

    #[test]
    fn test_exact_bus_fill_suggests_bus() {
        let cargo = vec![
            CargoItem::new(0.4, 2.4, 1.0, 1),
            CargoItem::new(3.7, 2.4, 1.0, 1),
            CargoItem::new(0.4, 2.4, 1.0, 1),
        ];
        assert_eq!(suggest(&cargo).vehicle, Some(VehicleKind::Bus));
    }

    #[test]
    fn test_no_vehicle_fits() {
        let cargo = vec![CargoItem::new(5.0, 3.0, 3.0, 1).with_weight(50000.0)];
        let suggestion = suggest(&cargo);
        assert!(suggestion.vehicle.is_none());
        assert_eq!(suggestion.identifier(), "brak");
        assert_eq!(suggestion.reason.as_deref(), Some(NO_VEHICLE_REASON));
    }

    #[test]
    fn test_evaluate_all_in_catalog_order() {
        let results = evaluate_all(&[CargoItem::new(1.0, 1.0, 1.0, 1)]);
        let kinds: Vec<VehicleKind> = results.iter().map(|r| r.vehicle_used).collect();
        assert_eq!(kinds, VehicleKind::ALL.to_vec());
    }
}
