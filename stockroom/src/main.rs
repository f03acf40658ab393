use anyhow::Context;
use std::sync::Arc;
use stockroom::seed::default_categories;
use stockroom::{CategoryStore, InventoryService, RedbEngine, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, config, work dir, logging
    let config = setup_environment().context("failed to prepare work directory")?;

    tracing::info!(environment = %config.environment, "📦 Stockroom starting...");

    // 2. Storage
    let db_path = config.db_path();
    let engine = RedbEngine::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let store = Arc::new(CategoryStore::new(Arc::new(engine)));
    let service = InventoryService::new(store);

    // 3. Categories
    let categories = if config.seed_categories {
        service.ensure_categories(default_categories()).await
    } else {
        service.store().get_categories().await.unwrap_or_default()
    };

    // 4. Dashboard
    let dashboard = service.dashboard(&categories).await;
    for overview in &dashboard.categories {
        tracing::info!(
            category = %overview.category.name,
            icon = %overview.category.icon,
            items = overview.summary.total,
            low = overview.summary.low_stock,
            "Category"
        );
    }
    tracing::info!(
        total_items = dashboard.totals.total,
        low_stock_items = dashboard.totals.low_stock,
        "Inventory summary"
    );

    Ok(())
}
