//! Order lifecycle management for OrderTrack
//!
//! This crate owns the order domain: the three-state lifecycle
//! (pending → processing → shipped), the storage abstraction, and the
//! business rules enforced over it.
//!
//! # Features
//!
//! - Order creation with input validation
//! - Status tracking and transition policy
//! - Query by id and by status
//! - Swappable storage behind the [`OrderStore`] trait
//! - HTTP API (axum) translating outcomes to status codes

pub mod api;
pub mod error;
pub mod manager;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{OrderError, Result};
pub use manager::{OrderManager, TransitionPolicy};
pub use types::{NewOrder, Order, OrderStatus};

// Store exports
pub use store::memory::InMemoryOrderStore;
pub use store::traits::OrderStore;
