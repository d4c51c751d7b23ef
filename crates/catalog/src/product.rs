use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::category::{slugify, CategoryId};
use shopfront_core::{DomainError, DomainResult, Entity, EntityId, Timestamps};

/// Product identifier. This is the reference type order line items carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Write-side input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub quantity: u64,
    pub category: CategoryId,
    /// Whether the product requires shipping.
    pub shipping: bool,
}

/// Catalog product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    slug: String,
    description: String,
    price: u64,
    quantity: u64,
    category: CategoryId,
    shipping: bool,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Product {
    /// Materialize a product from a draft. Validates before constructing.
    pub fn create(id: ProductId, draft: ProductDraft, now: DateTime<Utc>) -> DomainResult<Product> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name is required"));
        }
        if draft.description.trim().is_empty() {
            return Err(DomainError::validation("product description is required"));
        }

        Ok(Product {
            id,
            name: name.to_string(),
            slug: slugify(name),
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            category: draft.category,
            shipping: draft.shipping,
            timestamps: Timestamps::now(now),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn shipping(&self) -> bool {
        self.shipping
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at
    }

    /// Adjust the on-hand quantity (restock or decrement from fulfillment).
    pub fn set_quantity(&mut self, quantity: u64, now: DateTime<Utc>) {
        self.quantity = quantity;
        self.timestamps.touch(now);
    }

    /// Reprice the product.
    pub fn set_price(&mut self, price: u64, now: DateTime<Utc>) {
        self.price = price;
        self.timestamps.touch(now);
    }

    /// Move the product to another category.
    pub fn set_category(&mut self, category: CategoryId, now: DateTime<Utc>) {
        self.category = category;
        self.timestamps.touch(now);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new(EntityId::new())
    }

    fn test_category_id() -> CategoryId {
        CategoryId::new(EntityId::new())
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A sturdy test product".to_string(),
            price: 1999,
            quantity: 10,
            category: test_category_id(),
            shipping: true,
        }
    }

    #[test]
    fn create_validates_then_builds() {
        let now = Utc::now();
        let product = Product::create(test_product_id(), draft("Desk Lamp"), now).unwrap();
        assert_eq!(product.name(), "Desk Lamp");
        assert_eq!(product.slug(), "desk-lamp");
        assert_eq!(product.price(), 1999);
        assert_eq!(product.created_at(), now);
        assert_eq!(product.updated_at(), now);
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Product::create(test_product_id(), draft("  "), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_blank_description() {
        let mut d = draft("Desk Lamp");
        d.description = String::new();
        let err = Product::create(test_product_id(), d, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn mutations_touch_updated_at() {
        let t0 = Utc::now();
        let mut product = Product::create(test_product_id(), draft("Desk Lamp"), t0).unwrap();

        let t1 = t0 + chrono::Duration::seconds(2);
        product.set_quantity(7, t1);
        assert_eq!(product.quantity(), 7);
        assert_eq!(product.updated_at(), t1);

        let t2 = t1 + chrono::Duration::seconds(2);
        product.set_price(1499, t2);
        assert_eq!(product.price(), 1499);
        assert_eq!(product.updated_at(), t2);
        assert_eq!(product.created_at(), t0);
        assert!(product.created_at() <= product.updated_at());
    }

    #[test]
    fn product_reference_parses_only_canonical_ids() {
        let id = test_product_id();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let err = "abc123".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
