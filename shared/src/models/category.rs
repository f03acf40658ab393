//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `total_items` and `low_stock_items` are display caches. The persisted
/// values are stale snapshots; recompute them from the product lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Logical navigation path, e.g. `/categories/electronics`
    pub route: String,
    #[serde(default)]
    pub total_items: usize,
    #[serde(default)]
    pub low_stock_items: usize,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            route: route.into(),
            total_items: 0,
            low_stock_items: 0,
        }
    }

    /// Category identifier used as the storage key suffix (last route segment)
    pub fn slug(&self) -> &str {
        self.route.rsplit('/').next().unwrap_or_default()
    }
}
