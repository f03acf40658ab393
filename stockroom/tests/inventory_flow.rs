//! End-to-end product lifecycle against an on-disk redb file
//!
//! Every step saves the full list and reloads it from a fresh store handle.

use shared::models::{Product, ProductDraft};
use shared::Decimal;
use std::path::Path;
use std::sync::Arc;
use stockroom::products::list;
use stockroom::{CategoryStore, KvEngine, RedbEngine, StockSummary};

const CATEGORY: &str = "electronics";

fn phone_draft() -> ProductDraft {
    ProductDraft {
        name: "Phone".to_string(),
        sku: "P1".to_string(),
        price: Decimal::new(49999, 2),
        stock_quantity: 10,
        low_stock_threshold: 2,
        category: CATEGORY.to_string(),
        expiry_date: None,
    }
}

/// Save, then read back through a newly opened database handle
async fn save_and_reload(path: &Path, products: &[Product]) -> Vec<Product> {
    {
        let store = CategoryStore::new(Arc::new(RedbEngine::open(path).unwrap()));
        assert!(store.save_products(CATEGORY, products).await);
    }
    let store = CategoryStore::new(Arc::new(RedbEngine::open(path).unwrap()));
    store.get_products(CATEGORY).await
}

#[tokio::test]
async fn test_phone_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.redb");

    let store = CategoryStore::new(Arc::new(RedbEngine::open(&path).unwrap()));
    let products = store.get_products(CATEGORY).await;
    assert!(products.is_empty());
    drop(store);

    // create
    let products = list::create(&products, phone_draft());
    assert_eq!(products.len(), 1);
    let id = products[0].id.clone();
    assert!(!id.is_empty());
    assert_eq!(save_and_reload(&path, &products).await, products);

    // sell x3
    let mut products = products;
    for _ in 0..3 {
        products = list::sell(&products, &id);
        assert_eq!(save_and_reload(&path, &products).await, products);
    }
    assert_eq!(products[0].stock_quantity, 7);

    // update price
    let mut draft = ProductDraft::from(&products[0]);
    draft.price = Decimal::new(44999, 2);
    let products = list::update(&products, &id, &draft);
    assert_eq!(products[0].id, id);
    assert_eq!(products[0].stock_quantity, 7);
    assert_eq!(products[0].price, Decimal::new(44999, 2));
    assert_eq!(save_and_reload(&path, &products).await, products);

    // delete
    let products = list::delete(&products, &id);
    assert!(products.is_empty());
    assert_eq!(save_and_reload(&path, &products).await, products);
}

#[tokio::test]
async fn test_persisted_layout_is_plain_json() {
    let engine = Arc::new(RedbEngine::open_in_memory().unwrap());
    let store = CategoryStore::new(engine.clone());

    let products = list::create(&[], phone_draft());
    assert!(store.save_products(CATEGORY, &products).await);

    let raw = engine.get("products_electronics").await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["name"], "Phone");
    assert_eq!(first["stockQuantity"], 10);
    assert_eq!(first["lowStockThreshold"], 2);
    assert_eq!(first["category"], CATEGORY);
    assert_eq!(first["price"], 499.99);
}

#[tokio::test]
async fn test_summary_of_five_with_two_low() {
    let mut products = Vec::new();
    for (stock, threshold) in [(10, 2), (1, 3), (4, 4), (8, 0), (6, 5)] {
        let mut draft = phone_draft();
        draft.stock_quantity = stock;
        draft.low_stock_threshold = threshold;
        products = list::create(&products, draft);
    }

    let dir = tempfile::tempdir().unwrap();
    let reloaded = save_and_reload(&dir.path().join("inventory.redb"), &products).await;
    assert_eq!(
        list::aggregate(&reloaded),
        StockSummary {
            total: 5,
            low_stock: 2
        }
    );
}
