use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};

use shopfront_core::{DomainError, EntityId};
use shopfront_orders::{Order, OrderDraft, OrderId, OrderStatus};

use super::r#trait::{OrderFilter, OrderStore, OrderStoreError};

/// In-memory order store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    records: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> OrderStoreError {
        OrderStoreError::Connectivity("lock poisoned".to_string())
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, draft: OrderDraft) -> Result<Order, OrderStoreError> {
        // Materialize outside the lock: validation is a pure function of the
        // draft, and a failing draft must leave the map untouched.
        let id = OrderId::new(EntityId::new());
        let order = Order::materialize(id, draft, Utc::now())?;

        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        if records.contains_key(&id) {
            return Err(DomainError::conflict(format!("order {id} already exists")).into());
        }
        records.insert(id, order.clone());
        debug!(order_id = %id, status = %order.status(), "order created");

        Ok(order)
    }

    fn get(&self, id: OrderId) -> Result<Order, OrderStoreError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        records
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderStoreError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        let mut matching: Vec<Order> = records
            .values()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();
        // Identifiers are UUIDv7, so id order is creation order.
        matching.sort_by_key(|order| order.id_typed().0);
        Ok(matching)
    }

    fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderStoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        let order = records
            .get_mut(&id)
            .ok_or_else(|| OrderStoreError::from(DomainError::not_found()))?;
        order.set_status(status, Utc::now());
        debug!(order_id = %id, status = %status, "order status updated");
        Ok(order.clone())
    }

    fn record_payment(
        &self,
        id: OrderId,
        payment: serde_json::Value,
    ) -> Result<Order, OrderStoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        let order = records
            .get_mut(&id)
            .ok_or_else(|| OrderStoreError::from(DomainError::not_found()))?;
        order.record_payment(payment, Utc::now());
        debug!(order_id = %id, "order payment recorded");
        Ok(order.clone())
    }

    fn delete_all(&self, filter: &OrderFilter) -> Result<usize, OrderStoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        let before = records.len();
        records.retain(|_, order| !filter.matches(order));
        let removed = before - records.len();
        info!(removed, "orders deleted");
        Ok(removed)
    }
}
