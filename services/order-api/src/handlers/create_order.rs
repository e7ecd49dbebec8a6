use axum::{extract::State, http::StatusCode, Json};
use domain::{map_order, OrderPayload};
use order_store::StorageError;
use serde_json::json;
use tracing::{error, info};

use crate::handlers::{JsonBody, OrderResponse};
use crate::state::AppState;

/// Handle order creation. The order id must be present and non-empty
/// before storage is touched; everything else is the storage layer's
/// problem.
pub async fn handle(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<(StatusCode, Json<OrderResponse>), (StatusCode, JsonBody)> {
    if let Err(e) = payload.validate_for_create() {
        error!("Rejected order payload: {}", e);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        ));
    }

    let doc = map_order(&payload);

    match state.store.insert(&doc).await {
        Ok(record) => {
            info!("Order created: {}", record.order_id);
            Ok((
                StatusCode::CREATED,
                Json(OrderResponse {
                    message: "Order created.".to_string(),
                    data: record,
                }),
            ))
        }
        Err(e @ StorageError::DuplicateOrderId(_)) => {
            error!("Duplicate order id rejected: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            ))
        }
        Err(e) => {
            error!("Failed to persist order: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
