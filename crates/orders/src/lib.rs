//! `shopfront-orders` — the purchase order record.
//!
//! An order is a flat record: product references, a schema-free payment
//! payload, an optional buyer, a status from a closed enumeration, and
//! store-managed timestamps. Status checks are membership only; there is no
//! transition state machine.

pub mod order;

pub use order::{Order, OrderDraft, OrderId, OrderStatus};
