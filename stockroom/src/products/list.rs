//! Pure product list operations
//!
//! Every mutation takes the current list by reference and returns a new
//! list; the input is never modified. Lookups are linear scans by id.
//! Unknown ids are silent no-ops.

use serde::Serialize;
use shared::models::{Product, ProductDraft};
use shared::util::snowflake_id;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Item counts for one category, or summed across categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total: usize,
    pub low_stock: usize,
}

impl Add for StockSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total: self.total + rhs.total,
            low_stock: self.low_stock + rhs.low_stock,
        }
    }
}

impl AddAssign for StockSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for StockSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Count products and low-stock products
pub fn aggregate(products: &[Product]) -> StockSummary {
    StockSummary {
        total: products.len(),
        low_stock: products.iter().filter(|p| p.is_low_stock()).count(),
    }
}

pub fn find<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Timestamp-based id not used by any product in the list
pub fn fresh_id(products: &[Product]) -> String {
    loop {
        let id = snowflake_id().to_string();
        if find(products, &id).is_none() {
            return id;
        }
    }
}

/// Append a new product with a freshly generated id (last element)
pub fn create(products: &[Product], draft: ProductDraft) -> Vec<Product> {
    let id = fresh_id(products);
    let mut next = products.to_vec();
    next.push(Product::from_draft(id, draft));
    next
}

/// Replace every field of the matching product except its id
pub fn update(products: &[Product], id: &str, draft: &ProductDraft) -> Vec<Product> {
    products
        .iter()
        .map(|p| {
            if p.id == id {
                Product::from_draft(id, draft.clone())
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Drop the matching product
pub fn delete(products: &[Product], id: &str) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}

/// Sell a single unit of the matching product, stock floors at 0
pub fn sell(products: &[Product], id: &str) -> Vec<Product> {
    sell_units(products, id, 1)
}

/// Sell `quantity` units of the matching product, stock floors at 0
pub fn sell_units(products: &[Product], id: &str, quantity: u32) -> Vec<Product> {
    products
        .iter()
        .map(|p| {
            if p.id == id {
                Product {
                    stock_quantity: p.stock_quantity.saturating_sub(quantity),
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}
