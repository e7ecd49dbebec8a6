use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::{map_order, OrderPayload};
use serde_json::json;
use tracing::{error, info};

use crate::handlers::{JsonBody, OrderResponse};
use crate::state::AppState;

/// Replace all mapped fields of an order. This is a full overwrite, not a
/// patch: fields absent from the payload overwrite stored values, and the
/// storage layer rejects the result if a required column ends up NULL.
pub async fn handle(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderResponse>, (StatusCode, JsonBody)> {
    let doc = map_order(&payload);

    match state.store.replace(&order_id, &doc).await {
        Ok(Some(record)) => {
            info!("Order updated: {}", order_id);
            Ok(Json(OrderResponse {
                message: "Order updated.".to_string(),
                data: record,
            }))
        }
        Ok(None) => {
            info!("Order not found for update: {}", order_id);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Order not found." })),
            ))
        }
        Err(e) => {
            error!("Failed to update order {}: {}", order_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
