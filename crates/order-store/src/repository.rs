use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::OrderDocument;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::StorageError;

/// A persisted order. `id` is the storage-assigned identifier; clients
/// address orders by `order_id` only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_id: String,
    pub value: f64,
    pub creation_date: DateTime<Utc>,
    pub items: serde_json::Value,
}

/// Storage access for orders. Not-found is a normal result
/// (`Ok(None)` / `Ok(false)`), never an error; the only typed failure
/// besides driver errors is a duplicate `order_id` on insert.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order document
    async fn insert(&self, doc: &OrderDocument) -> Result<OrderRecord, StorageError>;

    /// Look up a single order by its external id
    async fn find_by_order_id(&self, order_id: &str)
        -> Result<Option<OrderRecord>, StorageError>;

    /// Every order in the collection, in storage-native order
    async fn list(&self) -> Result<Vec<OrderRecord>, StorageError>;

    /// Overwrite all mapped fields of the order keyed on `order_id`,
    /// returning the post-update record
    async fn replace(
        &self,
        order_id: &str,
        doc: &OrderDocument,
    ) -> Result<Option<OrderRecord>, StorageError>;

    /// Remove the order keyed on `order_id`; true if a record was removed
    async fn delete(&self, order_id: &str) -> Result<bool, StorageError>;
}
