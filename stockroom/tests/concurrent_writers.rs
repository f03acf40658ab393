//! Concurrent mutations on a shared store
//!
//! The read-modify-write of a product list is not atomic in the store;
//! the service serializes it per category so no update is lost.

use futures::future::join_all;
use shared::models::ProductDraft;
use shared::Decimal;
use std::sync::Arc;
use stockroom::{CategoryStore, InventoryService, MemoryEngine, RedbEngine};

const WRITERS: usize = 50;

fn draft(name: String, stock: u32, category: &str) -> ProductDraft {
    ProductDraft {
        name: name.clone(),
        sku: name,
        price: Decimal::ONE,
        stock_quantity: stock,
        low_stock_threshold: 0,
        category: category.to_string(),
        expiry_date: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_not_lost() {
    let store = CategoryStore::new(Arc::new(MemoryEngine::new()));
    let service = InventoryService::new(Arc::new(store));

    let tasks = (0..WRITERS).map(|i| {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .add_product("beverages", draft(format!("drink-{i}"), 1, "beverages"))
                .await
        })
    });
    for result in join_all(tasks).await {
        assert!(result.unwrap().persisted);
    }

    assert_eq!(service.products("beverages").await.len(), WRITERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sells_decrement_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let engine = RedbEngine::open(dir.path().join("inventory.redb")).unwrap();
    let service = InventoryService::new(Arc::new(CategoryStore::new(Arc::new(engine))));

    let added = service
        .add_product("beverages", draft("cola".to_string(), 100, "beverages"))
        .await;
    let id = added.products[0].id.clone();

    let tasks = (0..WRITERS).map(|_| {
        let service = service.clone();
        let id = id.clone();
        tokio::spawn(async move { service.sell_product("beverages", &id).await })
    });
    join_all(tasks).await;

    let products = service.products("beverages").await;
    assert_eq!(products[0].stock_quantity, (100 - WRITERS) as u32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_categories_do_not_interfere() {
    let store = CategoryStore::new(Arc::new(MemoryEngine::new()));
    let service = InventoryService::new(Arc::new(store));
    let categories = ["bakery", "toys", "sports", "beauty"];

    let tasks = (0..WRITERS).map(|i| {
        let service = service.clone();
        let category = categories[i % categories.len()];
        tokio::spawn(async move {
            service
                .add_product(category, draft(format!("item-{i}"), 3, category))
                .await
        })
    });
    join_all(tasks).await;

    let mut total = 0;
    for category in categories {
        let products = service.products(category).await;
        assert!(products.iter().all(|p| p.category == category));
        total += products.len();
    }
    assert_eq!(total, WRITERS);
    assert_eq!(service.store().registered_categories().await.len(), categories.len());
}
