//! Order-level notices for the forwarder

use ldm_domain::service::ldm_calculator::meters_to_cm;
use ldm_domain::{CargoItem, TransportOrder, VehicleKind};

pub const OVERSIZE_NOTICE: &str = "Ładunek może być ponadgabarytowy.";
pub const URGENT_NOTICE: &str =
    "Zlecenie jest pilne – spedytor skontaktuje się dziś telefonicznie.";

/// Notices about the order as a whole, one oversize notice per offending item
pub fn order_notices(order: &TransportOrder, items: &[CargoItem]) -> Vec<String> {
    let largest = VehicleKind::Trailer.profile();
    let mut notices = Vec::new();

    for item in items {
        let length_cm = meters_to_cm(item.length_m.max(item.width_m));
        let width_cm = meters_to_cm(item.length_m.min(item.width_m));
        if width_cm > largest.width_cm || length_cm > largest.length_cm {
            notices.push(OVERSIZE_NOTICE.to_string());
        }
    }

    if order.is_urgent {
        notices.push(URGENT_NOTICE.to_string());
    }

    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_notices_for_regular_order() {
        let items = vec![CargoItem::new(1.2, 0.8, 1.5, 4)];
        assert!(order_notices(&TransportOrder::default(), &items).is_empty());
    }

    #[test]
    fn test_urgent_order() {
        let order = TransportOrder {
            is_urgent: true,
            ..Default::default()
        };
        assert_eq!(order_notices(&order, &[]), vec![URGENT_NOTICE.to_string()]);
    }

    #[test]
    fn test_oversize_items() {
        let items = vec![
            CargoItem::new(3.0, 2.5, 1.0, 1),
            CargoItem::new(14.0, 2.0, 1.0, 1),
            // Rotates to fit the width
            CargoItem::new(2.0, 3.0, 1.0, 1),
        ];
        let order = TransportOrder {
            is_urgent: true,
            ..Default::default()
        };
        let notices = order_notices(&order, &items);
        assert_eq!(
            notices,
            vec![
                OVERSIZE_NOTICE.to_string(),
                OVERSIZE_NOTICE.to_string(),
                URGENT_NOTICE.to_string(),
            ]
        );
    }
}
