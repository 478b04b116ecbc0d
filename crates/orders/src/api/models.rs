//! API models for order HTTP endpoints

use serde::{Deserialize, Serialize};

use crate::types::{Order, OrderStatus};

/// Request to create a new order
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub customer_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to update an order's status
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub new_status: String,
}

/// List orders request parameters
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ListOrdersParams {
    #[serde(default)]
    pub status: Option<String>,
}

/// Single order in API responses
///
/// Flat structure with exactly the five order fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub customer_id: String,
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            item_name: order.item_name,
            quantity: order.quantity,
            customer_id: order.customer_id,
            status: order.status,
        }
    }
}

/// Response carrying a single order
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderApiResponse {
    pub success: bool,
    pub order: Option<OrderResponse>,
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

impl OrderApiResponse {
    pub fn success(order: OrderResponse) -> Self {
        Self {
            success: true,
            order: Some(order),
            error: None,
        }
    }
}

/// List orders response
#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub success: bool,
    pub total_count: u64,
    pub orders: Vec<OrderResponse>,
}

/// Error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Generic error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
