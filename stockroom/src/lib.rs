//! Stockroom - category-scoped inventory store
//!
//! # Architecture
//!
//! ```text
//! caller ─► InventoryService ─► products::list (pure ops)
//!                 │
//!                 ▼
//!           CategoryStore ─► KvEngine (redb / memory)
//! ```
//!
//! # Modules
//!
//! ```text
//! stockroom/src/
//! ├── core/          # configuration
//! ├── kv/            # key-value engine trait + backends
//! ├── store/         # category-keyed persistence
//! ├── products/      # list operations, editing form
//! ├── services/      # serialized mutations, dashboard
//! ├── seed.rs        # default categories
//! └── utils/         # logging
//! ```

pub mod core;
pub mod kv;
pub mod products;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

pub use crate::core::Config;
pub use kv::{KvEngine, KvError, MemoryEngine, RedbEngine};
pub use products::{ProductForm, StockSummary};
pub use services::{Dashboard, InventoryService, Mutation};
pub use store::{CategoryStore, StoreError, StoreResult};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and the config, create the work directory and start logging
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}
