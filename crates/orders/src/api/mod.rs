//! HTTP API for the order service

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::OrdersApiState;
pub use routes::{create_api_state, create_router};
