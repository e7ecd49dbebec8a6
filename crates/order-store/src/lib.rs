pub mod postgres;
pub mod repository;

pub use postgres::PostgresOrderStore;
pub use repository::{OrderRecord, OrderStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The unique index on `order_id` rejected the write
    #[error("an order with id '{0}' already exists")]
    DuplicateOrderId(String),

    /// An item in the document is missing a required field
    #[error("item field '{0}' must not be null")]
    IncompleteItem(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_names_the_order_id() {
        let err = StorageError::DuplicateOrderId("A1".to_string());
        assert_eq!(err.to_string(), "an order with id 'A1' already exists");
    }

    #[test]
    fn test_incomplete_item_error_names_the_field() {
        let err = StorageError::IncompleteItem("price");
        assert_eq!(err.to_string(), "item field 'price' must not be null");
    }

    #[test]
    fn test_database_error_carries_underlying_text() {
        let err = StorageError::Database(sqlx::Error::Protocol("connection reset".into()));
        assert!(err.to_string().contains("connection reset"));
    }
}
