//! Order Manager - core business logic for order handling

use std::sync::Arc;

use crate::error::{OrderError, Result};
use crate::store::traits::OrderStore;
use crate::types::{NewOrder, Order, OrderStatus};

/// Policy governing which status transitions the manager accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any move between the three statuses, including no-ops and backward
    /// moves
    #[default]
    Unrestricted,
    /// Only pending → processing → shipped progression; staying on the same
    /// status is allowed, moving backward is not
    ForwardOnly,
}

impl TransitionPolicy {
    /// Whether a move from `from` to `to` is permitted under this policy
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::ForwardOnly => to.stage() >= from.stage(),
        }
    }
}

/// Order Manager - enforces all business invariants over a store
///
/// The manager is the sole writer to the store: it validates creation input,
/// checks transition legality, filters queries, and translates rule
/// violations into typed errors.
pub struct OrderManager {
    store: Arc<dyn OrderStore>,
    policy: TransitionPolicy,
}

impl OrderManager {
    /// Create a new OrderManager over the given store
    ///
    /// Uses the unrestricted transition policy.
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            policy: TransitionPolicy::Unrestricted,
        }
    }

    /// Create an OrderManager with an explicit transition policy
    pub fn with_transition_policy(store: Arc<dyn OrderStore>, policy: TransitionPolicy) -> Self {
        Self { store, policy }
    }

    /// Create a new order
    ///
    /// Validates the input first; nothing is stored on a validation failure.
    /// A missing status defaults to `pending`.
    pub async fn create_order(&self, input: NewOrder) -> Result<Order> {
        let status = self.validate_new_order(&input)?;

        let order = Order::new(
            input.order_id,
            input.item_name,
            input.quantity,
            input.customer_id,
            status,
        );

        let order = self.store.put_new(order).await?;

        tracing::info!(
            order_id = %order.order_id,
            customer_id = %order.customer_id,
            status = %order.status,
            "Order created"
        );

        Ok(order)
    }

    /// Get an order by ID
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        self.store.get(order_id).await
    }

    /// List orders, optionally filtered by status
    ///
    /// The filter value is matched against the stored status verbatim; an
    /// unknown filter value yields an empty result rather than an error,
    /// since no stored order can match it.
    pub async fn list_orders(&self, status_filter: Option<&str>) -> Result<Vec<Order>> {
        let mut orders = self.store.get_all().await?;

        if let Some(filter) = status_filter {
            orders.retain(|o| o.status.as_str() == filter);
        }

        Ok(orders)
    }

    /// Update the status of an existing order
    ///
    /// All fields other than `status` are left unchanged.
    pub async fn update_status(&self, order_id: &str, new_status: &str) -> Result<Order> {
        let order = self.store.get(order_id).await?;

        let status = OrderStatus::parse(new_status).ok_or_else(|| {
            OrderError::ValidationError(format!("Status '{}' is not a valid status", new_status))
        })?;

        if !self.policy.allows(order.status, status) {
            return Err(OrderError::ValidationError(format!(
                "Transition from '{}' to '{}' is not allowed",
                order.status, status
            )));
        }

        let updated = self.store.replace(order_id, order.with_status(status)).await?;

        tracing::info!(order_id = %order_id, status = %updated.status, "Order status updated");

        Ok(updated)
    }

    /// Delete an order by ID
    pub async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.store.delete(order_id).await?;
        tracing::info!(order_id = %order_id, "Order deleted");
        Ok(())
    }

    /// Validate creation input and resolve the initial status
    fn validate_new_order(&self, input: &NewOrder) -> Result<OrderStatus> {
        if input.order_id.is_empty() {
            return Err(OrderError::ValidationError(
                "order_id must not be empty".to_string(),
            ));
        }

        if input.item_name.is_empty() {
            return Err(OrderError::ValidationError(
                "item_name must not be empty".to_string(),
            ));
        }

        if input.customer_id.is_empty() {
            return Err(OrderError::ValidationError(
                "customer_id must not be empty".to_string(),
            ));
        }

        if input.quantity == 0 {
            return Err(OrderError::ValidationError(
                "quantity must be greater than 0".to_string(),
            ));
        }

        match input.status.as_deref() {
            None => Ok(OrderStatus::Pending),
            Some(raw) => OrderStatus::parse(raw).ok_or_else(|| {
                OrderError::ValidationError(format!("Status '{}' is not a valid status", raw))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryOrderStore;
    use assert_matches::assert_matches;

    fn create_manager() -> OrderManager {
        OrderManager::new(Arc::new(InMemoryOrderStore::new()))
    }

    fn sample_input(order_id: &str) -> NewOrder {
        NewOrder {
            order_id: order_id.to_string(),
            item_name: "Laptop".to_string(),
            quantity: 2,
            customer_id: "CUST-123".to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_pending() {
        let manager = create_manager();

        let created = manager.create_order(sample_input("ORD-001")).await.unwrap();
        assert_eq!(created.status, OrderStatus::Pending);

        let fetched = manager.get_order("ORD-001").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let manager = create_manager();

        let mut input = sample_input("ORD-001");
        input.status = Some("shipped".to_string());

        let created = manager.create_order(input).await.unwrap();
        assert_eq!(created.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_first_record() {
        let manager = create_manager();
        manager.create_order(sample_input("ORD-002")).await.unwrap();

        let mut second = sample_input("ORD-002");
        second.item_name = "Phone".to_string();

        let err = manager.create_order(second).await.unwrap_err();
        assert_matches!(err, OrderError::AlreadyExists(id) if id == "ORD-002");

        let orders = manager.list_orders(None).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].item_name, "Laptop");
    }

    #[tokio::test]
    async fn test_create_zero_quantity_rejected() {
        let manager = create_manager();

        let mut input = sample_input("ORD-001");
        input.quantity = 0;

        let err = manager.create_order(input).await.unwrap_err();
        assert_matches!(err, OrderError::ValidationError(_));

        // Nothing stored
        assert_matches!(
            manager.get_order("ORD-001").await.unwrap_err(),
            OrderError::NotFound(_)
        );
    }

    #[tokio::test]
    async fn test_create_empty_fields_rejected() {
        let manager = create_manager();

        for field in ["order_id", "item_name", "customer_id"] {
            let mut input = sample_input("ORD-001");
            match field {
                "order_id" => input.order_id.clear(),
                "item_name" => input.item_name.clear(),
                _ => input.customer_id.clear(),
            }

            let err = manager.create_order(input).await.unwrap_err();
            assert_matches!(err, OrderError::ValidationError(_));
        }
    }

    #[tokio::test]
    async fn test_create_invalid_status_rejected() {
        let manager = create_manager();

        let mut input = sample_input("ORD-001");
        input.status = Some("delivered".to_string());

        let err = manager.create_order(input).await.unwrap_err();
        assert_matches!(err, OrderError::ValidationError(_));
    }

    #[tokio::test]
    async fn test_update_status_visible_via_get() {
        let manager = create_manager();
        manager.create_order(sample_input("ORD-001")).await.unwrap();

        let updated = manager.update_status("ORD-001", "processing").await.unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);
        assert_eq!(updated.item_name, "Laptop");

        let fetched = manager.get_order("ORD-001").await.unwrap();
        assert_eq!(fetched.status, OrderStatus::Processing);
    }

    #[tokio::test]
    async fn test_update_status_invalid_value_leaves_order_unchanged() {
        let manager = create_manager();
        manager.create_order(sample_input("ORD-001")).await.unwrap();

        let err = manager.update_status("ORD-001", "delivered").await.unwrap_err();
        assert_matches!(err, OrderError::ValidationError(_));

        let fetched = manager.get_order("ORD-001").await.unwrap();
        assert_eq!(fetched.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_backward_allowed_by_default() {
        let manager = create_manager();

        let mut input = sample_input("ORD-001");
        input.status = Some("shipped".to_string());
        manager.create_order(input).await.unwrap();

        let updated = manager.update_status("ORD-001", "pending").await.unwrap();
        assert_eq!(updated.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_forward_only_policy_rejects_backward_moves() {
        let manager = OrderManager::with_transition_policy(
            Arc::new(InMemoryOrderStore::new()),
            TransitionPolicy::ForwardOnly,
        );

        let mut input = sample_input("ORD-001");
        input.status = Some("processing".to_string());
        manager.create_order(input).await.unwrap();

        // Forward and same-status moves pass
        manager.update_status("ORD-001", "processing").await.unwrap();
        manager.update_status("ORD-001", "shipped").await.unwrap();

        // Backward move is rejected and the order keeps its status
        let err = manager.update_status("ORD-001", "pending").await.unwrap_err();
        assert_matches!(err, OrderError::ValidationError(_));
        assert_eq!(
            manager.get_order("ORD-001").await.unwrap().status,
            OrderStatus::Shipped
        );
    }

    #[tokio::test]
    async fn test_missing_order_yields_not_found() {
        let manager = create_manager();

        assert_matches!(
            manager.get_order("ORD-404").await.unwrap_err(),
            OrderError::NotFound(_)
        );
        assert_matches!(
            manager.update_status("ORD-404", "shipped").await.unwrap_err(),
            OrderError::NotFound(_)
        );
        assert_matches!(
            manager.delete_order("ORD-404").await.unwrap_err(),
            OrderError::NotFound(_)
        );
    }

    #[tokio::test]
    async fn test_list_orders_filtered_by_status() {
        let manager = create_manager();

        for (id, status) in [
            ("ORD-001", "pending"),
            ("ORD-002", "shipped"),
            ("ORD-003", "shipped"),
        ] {
            let mut input = sample_input(id);
            input.status = Some(status.to_string());
            manager.create_order(input).await.unwrap();
        }

        let shipped = manager.list_orders(Some("shipped")).await.unwrap();
        assert_eq!(shipped.len(), 2);
        assert!(shipped.iter().all(|o| o.status == OrderStatus::Shipped));

        // Unknown filter value matches nothing
        let none = manager.list_orders(Some("delivered")).await.unwrap();
        assert!(none.is_empty());

        let all = manager.list_orders(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let manager = create_manager();

        let created = manager.create_order(sample_input("ORD-001")).await.unwrap();
        assert_eq!(created.status, OrderStatus::Pending);

        manager.update_status("ORD-001", "processing").await.unwrap();
        assert_eq!(
            manager.get_order("ORD-001").await.unwrap().status,
            OrderStatus::Processing
        );

        manager.delete_order("ORD-001").await.unwrap();
        assert_matches!(
            manager.get_order("ORD-001").await.unwrap_err(),
            OrderError::NotFound(_)
        );
    }
}
