//! Inventory Service - per-category serialized product mutations
//!
//! Every mutation is a read-modify-write of a whole product list:
//!
//! ```text
//! lock(category) → get_products → list::<op> → save_products → unlock
//! ```
//!
//! The store itself is not atomic across that sequence, so two concurrent
//! callers on the same category would lose one update (last write wins).
//! A lock per category id closes that window; different categories never
//! contend.

use crate::products::list::{self, StockSummary};
use crate::store::CategoryStore;
use dashmap::DashMap;
use serde::Serialize;
use shared::models::{Category, Product, ProductDraft};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result of one mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    /// The new list, authoritative even when it was not persisted.
    /// Empty when the current list could not be read.
    pub products: Vec<Product>,
    /// Whether the store accepted the write
    pub persisted: bool,
}

/// Live counts for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOverview {
    pub category: Category,
    pub summary: StockSummary,
}

/// Per-category counts plus the global total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub categories: Vec<CategoryOverview>,
    pub totals: StockSummary,
}

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<CategoryStore>,
    /// category id -> write lock
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService")
            .field("store", &self.store)
            .field("locked_categories", &self.locks.len())
            .finish()
    }
}

impl InventoryService {
    pub fn new(store: Arc<CategoryStore>) -> Self {
        Self {
            store,
            locks: Arc::new(DashMap::new()),
        }
    }

    pub fn store(&self) -> &Arc<CategoryStore> {
        &self.store
    }

    // ========== Reads ==========

    pub async fn products(&self, category_id: &str) -> Vec<Product> {
        self.store.get_products(category_id).await
    }

    pub async fn summary(&self, category_id: &str) -> StockSummary {
        list::aggregate(&self.store.get_products(category_id).await)
    }

    /// Load each category's products once and sum the counts
    pub async fn dashboard(&self, categories: &[Category]) -> Dashboard {
        let mut overviews = Vec::with_capacity(categories.len());
        for category in categories {
            let summary = self.summary(category.slug()).await;
            overviews.push(CategoryOverview {
                category: category.clone(),
                summary,
            });
        }

        let totals: StockSummary = overviews.iter().map(|o| o.summary).sum();
        Dashboard {
            categories: overviews,
            totals,
        }
    }

    /// Categories with `total_items` / `low_stock_items` recomputed from live lists
    pub async fn refreshed_categories(&self, categories: &[Category]) -> Vec<Category> {
        self.dashboard(categories)
            .await
            .categories
            .into_iter()
            .map(|o| Category {
                total_items: o.summary.total,
                low_stock_items: o.summary.low_stock,
                ..o.category
            })
            .collect()
    }

    /// Persisted categories, seeding `defaults` when none exist yet
    pub async fn ensure_categories(&self, defaults: Vec<Category>) -> Vec<Category> {
        if let Some(categories) = self.store.get_categories().await {
            return categories;
        }
        if self.store.save_categories(&defaults).await {
            tracing::info!(count = defaults.len(), "Seeded default categories");
        }
        defaults
    }

    // ========== Mutations ==========

    pub async fn add_product(&self, category_id: &str, draft: ProductDraft) -> Mutation {
        self.mutate(category_id, "add", |products| list::create(products, draft))
            .await
    }

    pub async fn edit_product(&self, category_id: &str, id: &str, draft: ProductDraft) -> Mutation {
        self.mutate(category_id, "edit", |products| {
            list::update(products, id, &draft)
        })
        .await
    }

    pub async fn remove_product(&self, category_id: &str, id: &str) -> Mutation {
        self.mutate(category_id, "remove", |products| list::delete(products, id))
            .await
    }

    /// Sell one unit
    pub async fn sell_product(&self, category_id: &str, id: &str) -> Mutation {
        self.mutate(category_id, "sell", |products| list::sell(products, id))
            .await
    }

    pub async fn sell_product_units(&self, category_id: &str, id: &str, quantity: u32) -> Mutation {
        self.mutate(category_id, "sell", |products| {
            list::sell_units(products, id, quantity)
        })
        .await
    }

    /// Erase all inventory data
    pub async fn reset(&self) -> bool {
        self.store.clear_all().await
    }

    async fn mutate<F>(&self, category_id: &str, action: &'static str, apply: F) -> Mutation
    where
        F: FnOnce(&[Product]) -> Vec<Product>,
    {
        let lock = self.lock_for(category_id);
        let _guard = lock.lock().await;

        // An unreadable list must not be replaced by an edit of an empty one
        let current = match self.store.try_get_products(category_id).await {
            Ok(current) => current,
            Err(e) => {
                tracing::warn!(
                    category_id,
                    action,
                    error = %e,
                    "Mutation skipped, product list unreadable"
                );
                return Mutation {
                    products: Vec::new(),
                    persisted: false,
                };
            }
        };
        let products = apply(&current);
        let persisted = self.store.save_products(category_id, &products).await;

        if persisted {
            tracing::debug!(category_id, action, count = products.len(), "Product list updated");
        } else {
            tracing::warn!(category_id, action, "Product list changed but not persisted");
        }

        Mutation {
            products,
            persisted,
        }
    }

    fn lock_for(&self, category_id: &str) -> Arc<Mutex<()>> {
        Arc::clone(&self.locks.entry(category_id.to_string()).or_default())
    }
}
