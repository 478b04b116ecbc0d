//! OrderStore trait definition

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Order;

/// OrderStore trait - defines the interface for order storage
///
/// The store owns the order-by-id mapping and enforces identifier uniqueness
/// and existence, nothing else; all business rules live in the manager.
/// Implementations can be swapped (in-memory, durable backend) without
/// changing the business logic.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order keyed by its `order_id`
    ///
    /// Fails with `AlreadyExists` if the key is present; the stored record
    /// is left untouched in that case.
    async fn put_new(&self, order: Order) -> Result<Order>;

    /// Fetch the order stored under `order_id`
    ///
    /// Fails with `NotFound` if absent.
    async fn get(&self, order_id: &str) -> Result<Order>;

    /// Fetch every stored order
    ///
    /// Iteration order is unspecified.
    async fn get_all(&self) -> Result<Vec<Order>>;

    /// Overwrite the record at `order_id` with `order`
    ///
    /// Fails with `NotFound` if absent. The replacement is atomic; no reader
    /// observes a half-written record.
    async fn replace(&self, order_id: &str, order: Order) -> Result<Order>;

    /// Remove the entry at `order_id`
    ///
    /// Fails with `NotFound` if absent.
    async fn delete(&self, order_id: &str) -> Result<()>;
}
