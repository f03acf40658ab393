//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity, persisted as one element of a category's product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque id, assigned once at creation
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
    /// Category slug (redundant with the storage key)
    #[serde(default)]
    pub category: String,
    /// ISO-8601 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl Product {
    /// Build a product from a draft, assigning the given id
    pub fn from_draft(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            sku: draft.sku,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            low_stock_threshold: draft.low_stock_threshold,
            category: draft.category,
            expiry_date: draft.expiry_date,
        }
    }

    /// Stock at or below the product's own threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.low_stock_threshold
    }
}

/// Every product field except `id` (create / full-replace payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            low_stock_threshold: product.low_stock_threshold,
            category: product.category.clone(),
            expiry_date: product.expiry_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product {
            id: "1700000000000".to_string(),
            name: "Phone".to_string(),
            sku: "P1".to_string(),
            price: Decimal::new(49999, 2),
            stock_quantity: 10,
            low_stock_threshold: 2,
            category: "electronics".to_string(),
            expiry_date: None,
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(phone()).unwrap();
        assert_eq!(json["stockQuantity"], 10);
        assert_eq!(json["lowStockThreshold"], 2);
        assert_eq!(json["price"], 499.99);
        assert!(json.get("expiryDate").is_none());
    }

    #[test]
    fn test_missing_category_defaults_to_empty() {
        let raw = r#"{"id":"1","name":"Mug","sku":"M1","price":4.5,
            "stockQuantity":3,"lowStockThreshold":5,"expiryDate":"2026-01-01T00:00:00.000Z"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.category, "");
        assert_eq!(product.price, Decimal::new(45, 1));
        assert_eq!(product.expiry_date.as_deref(), Some("2026-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        let mut product = phone();
        assert!(!product.is_low_stock());
        product.stock_quantity = 2;
        assert!(product.is_low_stock());
        product.stock_quantity = 0;
        product.low_stock_threshold = 0;
        assert!(product.is_low_stock());
    }
}
