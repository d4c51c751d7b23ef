use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use shopfront_catalog::ProductId;
use shopfront_core::{DomainError, DomainResult, Entity, EntityId, Timestamps, UserId};

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Fulfillment status of an order.
///
/// Closed enumeration; membership is the only rule (any value may follow any
/// other). The wire strings are the exact tokens the upstream schema uses,
/// mixed capitalization included, so external contracts stay byte-identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Not Process")]
    NotProcess,
    Processing,
    Shipped,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "cancel")]
    Cancel,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::NotProcess,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancel,
    ];

    /// The exact wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::NotProcess => "Not Process",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancel => "cancel",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Exact-match parse. Absent status is defaulted by the caller; an invalid
    /// status is never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "status '{s}' is not one of: Not Process, Processing, Shipped, delivered, cancel"
                ))
            })
    }
}

/// Write-side input for creating an order, as received from the checkout flow.
///
/// References arrive as raw strings and the status as an optional raw token;
/// [`Order::materialize`] parses and validates everything before any record
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub products: Vec<String>,
    /// Schema-free payment payload; preserved verbatim.
    #[serde(default)]
    pub payment: JsonValue,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A persisted purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    products: Vec<ProductId>,
    payment: JsonValue,
    buyer: Option<UserId>,
    status: OrderStatus,
    #[serde(flatten)]
    timestamps: Timestamps,
}

impl Order {
    /// Materialize an order from a draft: atomic validate-then-build.
    ///
    /// Every field is parsed and checked before the record is constructed, so
    /// a failing draft produces no record at all. Rejects any `status` token
    /// outside the enumeration and any `products`/`buyer` entry that is not a
    /// well-formed reference identifier.
    pub fn materialize(id: OrderId, draft: OrderDraft, now: DateTime<Utc>) -> DomainResult<Order> {
        let products = draft
            .products
            .iter()
            .map(|raw| raw.parse::<ProductId>())
            .collect::<DomainResult<Vec<_>>>()?;

        let buyer = draft
            .buyer
            .as_deref()
            .map(str::parse::<UserId>)
            .transpose()?;

        let status = draft
            .status
            .as_deref()
            .map(str::parse::<OrderStatus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Order {
            id,
            products,
            payment: draft.payment,
            buyer,
            status,
            timestamps: Timestamps::now(now),
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    pub fn payment(&self) -> &JsonValue {
        &self.payment
    }

    pub fn buyer(&self) -> Option<UserId> {
        self.buyer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at
    }

    /// Replace the status and touch `updated_at`.
    pub fn set_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        self.timestamps.touch(now);
    }

    /// Replace the payment payload verbatim and touch `updated_at`.
    pub fn record_payment(&mut self, payment: JsonValue, now: DateTime<Utc>) {
        self.payment = payment;
        self.timestamps.touch(now);
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
