//! Order record store boundary.
//!
//! This module defines a storage-agnostic abstraction for persisting and
//! querying order records without making any storage assumptions. Validation
//! happens before any write: a draft either satisfies every constraint or
//! nothing is persisted.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryOrderStore;
pub use r#trait::{OrderFilter, OrderStore, OrderStoreError};
