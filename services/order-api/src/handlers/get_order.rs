use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use order_store::OrderRecord;
use serde_json::json;
use tracing::{error, info};

use crate::handlers::JsonBody;
use crate::state::AppState;

/// Get an order by its external id (never by the storage-assigned one)
pub async fn handle(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderRecord>, (StatusCode, JsonBody)> {
    match state.store.find_by_order_id(&order_id).await {
        Ok(Some(record)) => {
            info!("Found order: {}", order_id);
            Ok(Json(record))
        }
        Ok(None) => {
            info!("Order not found: {}", order_id);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Order not found." })),
            ))
        }
        Err(e) => {
            error!("Failed to look up order {}: {}", order_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
