//! Infrastructure layer: record stores and storage adapters.

pub mod order_store;


/// Database adapters (connection pools, migrations wiring).
pub mod db {}
