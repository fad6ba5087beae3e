//! Transport order loader (extraction step output as JSON)

use std::path::Path;

use ldm_domain::TransportOrder;
use ldm_types::{Error, Result};

/// Load an extracted transport order from a JSON file.
///
/// Accepts either the order object itself or an envelope holding it under
/// `parsed_data`.
pub fn load_order_from_json(path: &Path) -> Result<TransportOrder> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Order file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let order = parse_order_json(&content)?;
    log::info!(
        "Loaded order with {} cargo item(s) from {}",
        order.cargo_items.len(),
        path.display()
    );
    Ok(order)
}

/// Parse an extracted transport order from JSON text
pub fn parse_order_json(content: &str) -> Result<TransportOrder> {
    let mut value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(Error::InvalidInput(
            "Order JSON must be an object".to_string(),
        ));
    }
    if let Some(inner) = value.get_mut("parsed_data").map(serde_json::Value::take) {
        value = inner;
    }
    Ok(serde_json::from_value(value)?)
}
