use axum::{extract::State, http::StatusCode, Json};
use order_store::OrderRecord;
use serde_json::json;
use tracing::{error, info};

use crate::handlers::JsonBody;
use crate::state::AppState;

/// List every order, in whatever order storage returns them
pub async fn handle(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderRecord>>, (StatusCode, JsonBody)> {
    match state.store.list().await {
        Ok(records) => {
            info!("Listing {} orders", records.len());
            Ok(Json(records))
        }
        Err(e) => {
            error!("Failed to list orders: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}
