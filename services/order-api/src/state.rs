use anyhow::Result;
use order_store::{OrderStore, PostgresOrderStore};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers. The storage handle is
/// injected here; handlers never reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub async fn new(database_url: &str) -> Result<Self> {
        info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        info!("Database connected");

        let store = PostgresOrderStore::new(pool);
        store.ensure_schema().await?;

        Ok(Self::with_store(Arc::new(store)))
    }

    /// Build state around any storage implementation
    pub fn with_store(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}
