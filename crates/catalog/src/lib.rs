//! `shopfront-catalog` — product and category records.
//!
//! The catalog records are what order line references point at. Orders only
//! carry [`ProductId`] references; the catalog owns the records themselves.

pub mod category;
pub mod product;

pub use category::{Category, CategoryId};
pub use product::{Product, ProductDraft, ProductId};
