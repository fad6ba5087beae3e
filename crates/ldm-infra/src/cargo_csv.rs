//! Cargo list loader (CSV)
//!
//! Expected columns, header required:
//! length, width, height, quantity, [weight]
//!
//! Dimensions in meters, weight in kilograms per piece.

use std::io::Read;
use std::path::Path;

use ldm_domain::RawCargoItem;
use ldm_types::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct CargoRow {
    #[serde(alias = "length_m")]
    length: Option<String>,
    #[serde(alias = "width_m")]
    width: Option<String>,
    #[serde(alias = "height_m")]
    height: Option<String>,
    #[serde(alias = "count")]
    quantity: Option<String>,
    #[serde(default, alias = "weight_kg")]
    weight: Option<String>,
}

impl From<CargoRow> for RawCargoItem {
    fn from(row: CargoRow) -> Self {
        RawCargoItem {
            length: row.length.map(Value::String),
            width: row.width.map(Value::String),
            height: row.height.map(Value::String),
            quantity: row.quantity.map(Value::String),
            weight: row.weight.map(Value::String),
        }
    }
}

/// Load cargo records from a CSV file
pub fn load_cargo_from_csv(path: &Path) -> Result<Vec<RawCargoItem>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Cargo file not found: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)?;
    let items = parse_cargo_csv(file)?;
    log::info!("Loaded {} cargo row(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Parse cargo records from CSV data
pub fn parse_cargo_csv<R: Read>(reader: R) -> Result<Vec<RawCargoItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for record in csv_reader.deserialize::<CargoRow>() {
        items.push(RawCargoItem::from(record?));
    }
    Ok(items)
}
