use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{create_order, delete_order, get_order, health, list_orders, update_order};
use crate::state::AppState;

/// Build the application router with all routes.
/// `/order/list` is registered alongside `/order/:id`; the static
/// segment takes priority.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/order", post(create_order::handle))
        .route("/order/list", get(list_orders::handle))
        .route(
            "/order/:id",
            get(get_order::handle)
                .put(update_order::handle)
                .delete(delete_order::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
