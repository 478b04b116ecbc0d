//! Domain types for order tracking
//!
//! This module defines the core domain types shared across the store,
//! the manager, and the HTTP API.

use serde::{Deserialize, Serialize};

// ============================================================================
// Order Status
// ============================================================================

/// Lifecycle status of an order
///
/// The status is the only field of an order that may change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, not yet picked up for processing
    Pending,
    /// Order is being prepared
    Processing,
    /// Order has left the warehouse
    Shipped,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    /// Parse from string (case-sensitive, matches the wire format)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            _ => None,
        }
    }

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
        }
    }

    /// Position in the pending → processing → shipped progression
    pub fn stage(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Shipped => 2,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("'{}' is not a valid status", s))
    }
}

// ============================================================================
// Order
// ============================================================================

/// A customer order tracked by the system
///
/// `order_id`, `item_name`, `quantity` and `customer_id` are immutable after
/// creation; only `status` changes via the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-supplied unique identifier
    pub order_id: String,
    /// Name of the ordered item
    pub item_name: String,
    /// Number of items ordered, always > 0
    pub quantity: u32,
    /// Identifier of the customer who placed the order
    pub customer_id: String,
    /// Current lifecycle status
    pub status: OrderStatus,
}

impl Order {
    /// Create a new order in the given status
    pub fn new(
        order_id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: u32,
        customer_id: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            item_name: item_name.into(),
            quantity,
            customer_id: customer_id.into(),
            status,
        }
    }

    /// Copy of this order with a different status, all other fields unchanged
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Validated creation input for an order
///
/// This is the schema-checked structure the manager accepts; it is turned
/// into an [`Order`] only after validation succeeds.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub order_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub customer_id: String,
    /// Raw status value; `None` defaults to `pending`
    pub status: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
