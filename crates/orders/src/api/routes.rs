//! API routes for the order service

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::*;
use crate::manager::OrderManager;

/// Create the order service router
pub fn create_router(state: OrdersApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/orders", axum::routing::post(create_order).get(list_orders))
        .route("/api/orders/:order_id", get(get_order).delete(delete_order))
        .route("/api/orders/:order_id/status", put(update_status))
        .with_state(state)
}

/// Build the API state for the router
pub fn create_api_state(manager: OrderManager) -> OrdersApiState {
    OrdersApiState {
        manager: Arc::new(manager),
    }
}
