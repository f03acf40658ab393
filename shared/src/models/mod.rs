//! Data models
//!
//! Shared between the stockroom store and any presentation layer.
//! All JSON field names are camelCase to match the persisted layout.

pub mod category;
pub mod product;
pub mod sale;

// Re-exports
pub use category::*;
pub use product::*;
pub use sale::*;
