//! redb-backed key-value engine
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `kv` | storage key | JSON text |

use super::{KvEngine, KvResult};
use async_trait::async_trait;
use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Single table holding every inventory key
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Durable engine backed by a redb file
#[derive(Clone)]
pub struct RedbEngine {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbEngine").finish_non_exhaustive()
    }
}

impl RedbEngine {
    /// Open or create the database at the given path
    ///
    /// Commits are durable once `commit()` returns; redb swaps pages
    /// atomically so the file stays consistent across power loss.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> KvResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> KvResult<Self> {
        // Create the table if it doesn't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Run a redb call on the blocking pool; redb does synchronous file I/O
    async fn blocking<T, F>(&self, op: F) -> KvResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> KvResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || op(&db)).await?
    }
}

#[async_trait]
impl KvEngine for RedbEngine {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let key = key.to_string();
        self.blocking(move |db| {
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(KV_TABLE)?;
            let value = table.get(key.as_str())?.map(|guard| guard.value().to_string());
            Ok(value)
        })
        .await
    }

    async fn set(&self, key: &str, value: String) -> KvResult<()> {
        let key = key.to_string();
        self.blocking(move |db| {
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(KV_TABLE)?;
                table.insert(key.as_str(), value.as_str())?;
            }
            txn.commit()?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, keys: &[String]) -> KvResult<()> {
        let keys = keys.to_vec();
        self.blocking(move |db| {
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(KV_TABLE)?;
                for key in &keys {
                    table.remove(key.as_str())?;
                }
            }
            txn.commit()?;
            Ok(())
        })
        .await
    }
}
