use thiserror::Error;

use shopfront_core::{DomainError, UserId};
use shopfront_orders::{Order, OrderDraft, OrderId, OrderStatus};

/// Order store operation error.
///
/// Domain failures (validation, malformed references, not-found) come through
/// [`OrderStoreError::Domain`]; everything else is infrastructure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderStoreError {
    /// A deterministic domain failure; the record was not persisted.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The underlying storage driver failed; retry/alerting is the caller's
    /// responsibility.
    #[error("storage connectivity: {0}")]
    Connectivity(String),
}

/// Query/delete filter. The default (empty) filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub buyer: Option<UserId>,
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(buyer) = self.buyer {
            if order.buyer() != Some(buyer) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status() != status {
                return false;
            }
        }
        true
    }
}

/// Storage boundary for order records.
///
/// Implementations must be safe to share across concurrent request handlers;
/// each write targets its own record and validation is a pure function of the
/// input, so no application-level locking is required of callers.
pub trait OrderStore: Send + Sync {
    /// Validate and persist a new order from a checkout draft.
    ///
    /// Generates the identifier and timestamps; the draft never carries them.
    /// Atomic validate-then-write: on any validation failure nothing is
    /// persisted.
    fn create(&self, draft: OrderDraft) -> Result<Order, OrderStoreError>;

    /// Fetch a single order. `DomainError::NotFound` when absent.
    fn get(&self, id: OrderId) -> Result<Order, OrderStoreError>;

    /// List records matching the filter, in identifier order.
    fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderStoreError>;

    /// Replace the status of an existing order and touch `updated_at`.
    fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderStoreError>;

    /// Replace the payment payload of an existing order verbatim.
    fn record_payment(
        &self,
        id: OrderId,
        payment: serde_json::Value,
    ) -> Result<Order, OrderStoreError>;

    /// Remove all records matching the filter, returning the count.
    ///
    /// Orders are never deleted in normal operation; this exists for test
    /// isolation between runs.
    fn delete_all(&self, filter: &OrderFilter) -> Result<usize, OrderStoreError>;
}
