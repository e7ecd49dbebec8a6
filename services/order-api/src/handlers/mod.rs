pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod health;
pub mod list_orders;
pub mod update_order;

use order_store::OrderRecord;
use serde::Serialize;

/// Success body carrying the affected record
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: String,
    pub data: OrderRecord,
}

/// Error/status body. The key differs per branch (`error` for client and
/// storage failures, `message` for not-found and plain confirmations),
/// matching the observed wire contract.
pub type JsonBody = axum::Json<serde_json::Value>;
