//! Shared types for the stockroom inventory
//!
//! Domain model (products, categories, sales) and small utilities used by
//! the store and by any presentation layer built on top of it.

pub mod models;
pub mod util;

// Re-exports
pub use models::{Category, Product, ProductDraft, Sale};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
