//! API handlers for order HTTP endpoints

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::models::*;
use crate::error::OrderError;
use crate::manager::OrderManager;
use crate::types::NewOrder;

/// Shared state for the order API
pub struct OrdersApiState {
    pub manager: Arc<OrderManager>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP representation
fn error_response(err: &OrderError) -> ApiError {
    let (status, code) = match err {
        OrderError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        OrderError::NotFound(_) => (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND"),
        OrderError::AlreadyExists(_) => (StatusCode::CONFLICT, "DUPLICATE_ORDER"),
    };

    (status, Json(ErrorResponse::new(code, err.to_string())))
}

/// Map a malformed/incomplete JSON body to a 400
fn body_rejection(rejection: JsonRejection) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("INVALID_BODY", rejection.body_text())),
    )
}

/// Health check handler
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "ordertrack".to_string(),
    })
}

/// Create order handler
pub async fn create_order(
    State(state): State<Arc<OrdersApiState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderApiResponse>), ApiError> {
    let Json(req) = payload.map_err(body_rejection)?;

    let input = NewOrder {
        order_id: req.order_id,
        item_name: req.item_name,
        quantity: req.quantity,
        customer_id: req.customer_id,
        status: req.status,
    };

    match state.manager.create_order(input).await {
        Ok(order) => Ok((
            StatusCode::CREATED,
            Json(OrderApiResponse::success(OrderResponse::from(order))),
        )),
        Err(e) => Err(error_response(&e)),
    }
}

/// Get order handler
pub async fn get_order(
    State(state): State<Arc<OrdersApiState>>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderApiResponse>, ApiError> {
    match state.manager.get_order(&order_id).await {
        Ok(order) => Ok(Json(OrderApiResponse::success(OrderResponse::from(order)))),
        Err(e) => Err(error_response(&e)),
    }
}

/// List orders handler
pub async fn list_orders(
    State(state): State<Arc<OrdersApiState>>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    match state.manager.list_orders(params.status.as_deref()).await {
        Ok(orders) => {
            let orders: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
            Ok(Json(ListOrdersResponse {
                success: true,
                total_count: orders.len() as u64,
                orders,
            }))
        }
        Err(e) => Err(error_response(&e)),
    }
}

/// Update order status handler
pub async fn update_status(
    State(state): State<Arc<OrdersApiState>>,
    Path(order_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<OrderApiResponse>, ApiError> {
    let Json(req) = payload.map_err(body_rejection)?;

    match state.manager.update_status(&order_id, &req.new_status).await {
        Ok(order) => Ok(Json(OrderApiResponse::success(OrderResponse::from(order)))),
        Err(e) => Err(error_response(&e)),
    }
}

/// Delete order handler
pub async fn delete_order(
    State(state): State<Arc<OrdersApiState>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.manager.delete_order(&order_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(&e)),
    }
}
