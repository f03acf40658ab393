//! Sale Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sale record (not produced by any stock mutation yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// ISO-8601 timestamp
    pub date: String,
    pub customer_name: String,
}
