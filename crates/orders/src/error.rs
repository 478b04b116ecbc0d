//! Order service error types

use thiserror::Error;

/// Errors that can occur in the order service
///
/// Every variant is a deterministic validation or lookup failure; none of
/// them is retried internally and none leaves partial state behind.
#[derive(Error, Debug)]
pub enum OrderError {
    /// Missing/empty required field, non-positive quantity, or an unknown
    /// status value
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Lookup referenced an order id that is not in the store
    #[error("Order with ID '{0}' does not exist")]
    NotFound(String),

    /// Creation attempted with an order id that is already present
    #[error("Order with ID '{0}' already exists")]
    AlreadyExists(String),
}

/// Result type for order operations
pub type Result<T> = std::result::Result<T, OrderError>;
