//! Loaders for extracted orders and cargo lists

pub mod cargo_csv;
pub mod order_json;

pub use cargo_csv::{load_cargo_from_csv, parse_cargo_csv};
pub use order_json::{load_order_from_json, parse_order_json};
