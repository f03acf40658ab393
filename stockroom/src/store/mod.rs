//! Category store - category-keyed persistence over a [`KvEngine`]
//!
//! # Keys
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `products_<categoryId>` | `Vec<Product>` | Product list of one category (full replace) |
//! | `categories` | `Vec<Category>` | Category list, counts are stale snapshots |
//! | `product_categories` | `Vec<String>` | Every category id ever saved, for `clear_all` |
//!
//! # Failure policy
//!
//! Every operation has a `try_*` form that reports a [`StoreError`] and a
//! plain form that collapses the failure to a benign default (empty list,
//! `None` or `false`) after logging it. Nothing is retried.

use crate::kv::{KvEngine, KvError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Category, Product};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Namespace prefix of per-category product keys
pub const PRODUCTS_PREFIX: &str = "products";

/// Separator between the prefix and the category id
pub const KEY_SEPARATOR: &str = "_";

/// Key of the persisted category list
pub const CATEGORIES_KEY: &str = "categories";

/// Key of the category id registry.
/// Lives outside the `products_` namespace so no category id can collide with it.
pub const REGISTRY_KEY: &str = "product_categories";

/// Storage key of a category's product list
pub fn products_key(category_id: &str) -> String {
    format!("{PRODUCTS_PREFIX}{KEY_SEPARATOR}{category_id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage read failed for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: KvError,
    },

    #[error("Storage write failed for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: KvError,
    },

    #[error("Serialization error for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Corrupt value under {key}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether the failure happened while reading (deserialization included)
    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read { .. } | StoreError::Deserialize { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Category-keyed product and category persistence
pub struct CategoryStore {
    engine: Arc<dyn KvEngine>,
    /// Serializes registry updates with the product write that follows them
    registry_lock: Mutex<()>,
}

impl std::fmt::Debug for CategoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryStore")
            .field("engine", &self.engine)
            .finish()
    }
}

impl CategoryStore {
    pub fn new(engine: Arc<dyn KvEngine>) -> Self {
        Self {
            engine,
            registry_lock: Mutex::new(()),
        }
    }

    // ========== Products ==========

    /// Load a category's products; an absent key is an empty list
    pub async fn try_get_products(&self, category_id: &str) -> StoreResult<Vec<Product>> {
        let key = products_key(category_id);
        Ok(self.read_json(&key).await?.unwrap_or_default())
    }

    /// Load a category's products, empty on absence or any failure
    pub async fn get_products(&self, category_id: &str) -> Vec<Product> {
        match self.try_get_products(category_id).await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(category_id, error = %e, "Failed to load products");
                Vec::new()
            }
        }
    }

    /// Replace a category's product list
    pub async fn try_save_products(
        &self,
        category_id: &str,
        products: &[Product],
    ) -> StoreResult<()> {
        let key = products_key(category_id);
        let value = encode(&key, &products)?;

        // Held until the list is written so clear_all can't run in between
        let _guard = self.registry_lock.lock().await;
        self.register(category_id).await?;
        self.write_raw(&key, value).await
    }

    /// Replace a category's product list, `false` on any failure
    pub async fn save_products(&self, category_id: &str, products: &[Product]) -> bool {
        match self.try_save_products(category_id, products).await {
            Ok(()) => {
                tracing::debug!(category_id, count = products.len(), "Products saved");
                true
            }
            Err(e) => {
                tracing::warn!(category_id, error = %e, "Failed to save products");
                false
            }
        }
    }

    // ========== Categories ==========

    /// Load the category list; `None` means nothing was ever persisted
    pub async fn try_get_categories(&self) -> StoreResult<Option<Vec<Category>>> {
        self.read_json(CATEGORIES_KEY).await
    }

    /// Load the category list, `None` on absence or any failure
    pub async fn get_categories(&self) -> Option<Vec<Category>> {
        match self.try_get_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load categories");
                None
            }
        }
    }

    pub async fn try_save_categories(&self, categories: &[Category]) -> StoreResult<()> {
        let value = encode(CATEGORIES_KEY, &categories)?;
        self.write_raw(CATEGORIES_KEY, value).await
    }

    /// Replace the category list, `false` on any failure
    pub async fn save_categories(&self, categories: &[Category]) -> bool {
        match self.try_save_categories(categories).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save categories");
                false
            }
        }
    }

    // ========== Registry ==========

    /// Category ids that have had a product list saved, in first-save order
    pub async fn try_registered_categories(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_json(REGISTRY_KEY).await?.unwrap_or_default())
    }

    pub async fn registered_categories(&self) -> Vec<String> {
        match self.try_registered_categories().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load category registry");
                Vec::new()
            }
        }
    }

    /// Registry contents for a read-modify-write; an unreadable registry
    /// counts as empty and gets rewritten
    async fn registry_for_update(&self) -> Vec<String> {
        match self.try_registered_categories().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "Category registry unreadable, starting over");
                Vec::new()
            }
        }
    }

    /// Caller holds `registry_lock`
    async fn register(&self, category_id: &str) -> StoreResult<()> {
        let mut ids = self.registry_for_update().await;
        if ids.iter().any(|id| id == category_id) {
            return Ok(());
        }
        ids.push(category_id.to_string());
        let value = encode(REGISTRY_KEY, &ids)?;
        self.write_raw(REGISTRY_KEY, value).await
    }

    // ========== Clear ==========

    /// Remove the category list, the registry and every registered product list
    pub async fn try_clear_all(&self) -> StoreResult<()> {
        let _guard = self.registry_lock.lock().await;
        let ids = self.registry_for_update().await;

        let mut keys = vec![CATEGORIES_KEY.to_string(), REGISTRY_KEY.to_string()];
        keys.extend(ids.iter().map(|id| products_key(id)));

        self.engine
            .remove(&keys)
            .await
            .map_err(|source| StoreError::Write {
                key: keys.join(","),
                source,
            })?;

        tracing::info!(categories = ids.len(), "Inventory data cleared");
        Ok(())
    }

    /// Erase all persisted inventory state, `false` on any failure
    pub async fn clear_all(&self) -> bool {
        match self.try_clear_all().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to clear inventory data");
                false
            }
        }
    }

    // ========== Helpers ==========

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let raw = self
            .engine
            .get(key)
            .await
            .map_err(|source| StoreError::Read {
                key: key.to_string(),
                source,
            })?;

        raw.map(|data| {
            serde_json::from_str(&data).map_err(|source| StoreError::Deserialize {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    async fn write_raw(&self, key: &str, value: String) -> StoreResult<()> {
        self.engine
            .set(key, value)
            .await
            .map_err(|source| StoreError::Write {
                key: key.to_string(),
                source,
            })
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })
}
