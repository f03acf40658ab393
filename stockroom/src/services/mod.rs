//! Services
//!
//! - [`InventoryService`] - serialized per-category mutations and dashboard summaries

pub mod inventory_service;

pub use inventory_service::{CategoryOverview, Dashboard, InventoryService, Mutation};
