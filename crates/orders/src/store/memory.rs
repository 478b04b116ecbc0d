//! In-memory order store implementation

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{OrderError, Result};
use crate::store::traits::OrderStore;
use crate::types::Order;

/// In-memory order store
///
/// Stores all orders in a single locked map. Fast but non-persistent - data
/// is lost on restart. One lock covers the whole mapping, which serializes
/// writers against each other and against readers.
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
    /// Create a new, empty in-memory order store
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// True if no orders are stored
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn put_new(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;

        match orders.entry(order.order_id.clone()) {
            Entry::Occupied(_) => Err(OrderError::AlreadyExists(order.order_id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(order.clone());
                Ok(order)
            }
        }
    }

    async fn get(&self, order_id: &str) -> Result<Order> {
        let orders = self.orders.read().await;
        orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }

    async fn replace(&self, order_id: &str, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;

        match orders.get_mut(order_id) {
            Some(slot) => {
                *slot = order.clone();
                Ok(order)
            }
            None => Err(OrderError::NotFound(order_id.to_string())),
        }
    }

    async fn delete(&self, order_id: &str) -> Result<()> {
        let mut orders = self.orders.write().await;

        match orders.remove(order_id) {
            Some(_) => Ok(()),
            None => Err(OrderError::NotFound(order_id.to_string())),
        }
    }
}
