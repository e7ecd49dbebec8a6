use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::handlers::JsonBody;
use crate::state::AppState;

/// Remove an order keyed on its external id
pub async fn handle(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, JsonBody)> {
    match state.store.delete(&order_id).await {
        Ok(true) => {
            info!("Order deleted: {}", order_id);
            Ok(Json(json!({ "message": "Order deleted." })))
        }
        Ok(false) => {
            info!("Order not found for delete: {}", order_id);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Order not found." })),
            ))
        }
        Err(e) => {
            error!("Failed to delete order {}: {}", order_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
