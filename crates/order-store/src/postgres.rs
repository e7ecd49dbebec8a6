use async_trait::async_trait;
use domain::OrderDocument;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{OrderRecord, OrderStore};
use crate::StorageError;

const SELECT_COLUMNS: &str = "id, order_id, value, creation_date, items";

/// PostgreSQL implementation of [`OrderStore`]. Orders live in a single
/// `orders` table; the item list is a JSONB document. Required-field
/// enforcement for the top-level columns is the NOT NULL constraints,
/// uniqueness of `order_id` is a unique index.
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the orders table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id UUID PRIMARY KEY,
                order_id TEXT NOT NULL UNIQUE,
                value DOUBLE PRECISION NOT NULL,
                creation_date TIMESTAMPTZ NOT NULL,
                items JSONB NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// The JSONB column cannot enforce fields inside the item documents, so
/// the required-field invariant for items is checked before the write.
fn check_items(doc: &OrderDocument) -> Result<(), StorageError> {
    for item in doc.items.iter().flatten() {
        if item.product_id.is_none() {
            return Err(StorageError::IncompleteItem("productId"));
        }
        if item.quantity.is_none() {
            return Err(StorageError::IncompleteItem("quantity"));
        }
        if item.price.is_none() {
            return Err(StorageError::IncompleteItem("price"));
        }
    }
    Ok(())
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn insert(&self, doc: &OrderDocument) -> Result<OrderRecord, StorageError> {
        check_items(doc)?;

        let record = sqlx::query_as::<_, OrderRecord>(&format!(
            r#"
            INSERT INTO orders (id, order_id, value, creation_date, items)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(doc.order_id.as_deref())
        .bind(doc.value)
        .bind(doc.creation_date)
        .bind(doc.items.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StorageError::DuplicateOrderId(doc.order_id.clone().unwrap_or_default())
            }
            _ => StorageError::Database(e),
        })?;

        Ok(record)
    }

    async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<OrderRecord>, StorageError> {
        let record = sqlx::query_as::<_, OrderRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders WHERE order_id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<OrderRecord>, StorageError> {
        let records = sqlx::query_as::<_, OrderRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn replace(
        &self,
        order_id: &str,
        doc: &OrderDocument,
    ) -> Result<Option<OrderRecord>, StorageError> {
        check_items(doc)?;

        let record = sqlx::query_as::<_, OrderRecord>(&format!(
            r#"
            UPDATE orders
            SET order_id = $2, value = $3, creation_date = $4, items = $5
            WHERE order_id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(order_id)
        .bind(doc.order_id.as_deref())
        .bind(doc.value)
        .bind(doc.creation_date)
        .bind(doc.items.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn delete(&self, order_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ItemDocument;

    fn document_with_item(item: ItemDocument) -> OrderDocument {
        OrderDocument {
            order_id: Some("A1".to_string()),
            value: Some(99.5),
            creation_date: None,
            items: Some(vec![item]),
        }
    }

    fn complete_item() -> ItemDocument {
        ItemDocument {
            product_id: Some(7),
            quantity: Some(2.0),
            price: Some(10.0),
        }
    }

    #[test]
    fn test_check_items_accepts_complete_items() {
        assert!(check_items(&document_with_item(complete_item())).is_ok());
    }

    #[test]
    fn test_check_items_accepts_absent_or_empty_item_list() {
        let no_items = OrderDocument {
            order_id: Some("A1".to_string()),
            value: Some(99.5),
            creation_date: None,
            items: None,
        };
        assert!(check_items(&no_items).is_ok());

        let empty = OrderDocument {
            items: Some(vec![]),
            ..no_items
        };
        assert!(check_items(&empty).is_ok());
    }

    #[test]
    fn test_check_items_rejects_a_null_required_field() {
        for (item, field) in [
            (ItemDocument { product_id: None, ..complete_item() }, "productId"),
            (ItemDocument { quantity: None, ..complete_item() }, "quantity"),
            (ItemDocument { price: None, ..complete_item() }, "price"),
        ] {
            match check_items(&document_with_item(item)) {
                Err(StorageError::IncompleteItem(name)) => assert_eq!(name, field),
                other => panic!("expected IncompleteItem, got {other:?}"),
            }
        }
    }
}
