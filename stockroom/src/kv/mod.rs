//! Key-value engine abstraction
//!
//! The category store only needs three string-keyed operations from its
//! backing engine:
//! ```text
//!         ┌────────────────────┐
//!         │   KvEngine Trait   │  ◄── pluggable backend
//!         └────────┬───────────┘
//!                  │
//!          ┌───────┴───────┐
//!          ▼               ▼
//!     RedbEngine      MemoryEngine
//!   (single file)    (in process)
//! ```

mod memory;
mod redb_engine;

pub use memory::MemoryEngine;
pub use redb_engine::RedbEngine;

use async_trait::async_trait;
use thiserror::Error;

/// Engine failures. Callers treat every kind as opaque.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type KvResult<T> = Result<T, KvError>;

/// Asynchronous string key-value engine
#[async_trait]
pub trait KvEngine: Send + Sync + std::fmt::Debug {
    /// Read a key, `None` when absent
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Write a key, replacing any previous value
    async fn set(&self, key: &str, value: String) -> KvResult<()>;

    /// Remove keys; absent keys are ignored
    async fn remove(&self, keys: &[String]) -> KvResult<()>;
}
