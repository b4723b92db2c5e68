//! # Domain Types
//!
//! Core domain types used throughout Velo OMS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │      Order      │   │   OrderLine     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  sku (PK)       │   │  id "ORD0001"   │   │  order_id (FK)  │   │
//! │  │  name           │   │  customer_name  │   │  product_sku?   │   │
//! │  │  category?      │   │  gst_rate_bps   │   │  product_name   │   │
//! │  │  quantity       │   │  totals (cents) │   │  qty, unit price│   │
//! │  │  price_cents    │   │  advance_cents  │   │  (snapshots)    │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    GstRate      │   │  PaymentMethod  │   │ Category/Model  │   │
//! │  │  bps (u32)      │   │  Cash / Card /  │   │  bare name      │   │
//! │  │  500 = 5%       │   │  Upi / Bank     │   │  records        │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Entities are keyed by business identifiers: products by SKU, orders by
//! their formatted sequential ID. Line items reference products weakly:
//! the SKU may dangle to `None` after a product is deleted, because the
//! line carries its own name and price snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// GST Rate
// =============================================================================

/// GST rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 500 bps = 5% (the Indian GST slab
/// this shop charges by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstRate(u32);

impl GstRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        GstRate(bps)
    }

    /// Creates a rate from a percentage (convenience for config parsing).
    pub fn from_percentage(pct: f64) -> Self {
        GstRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage, for display only.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        GstRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate(crate::DEFAULT_GST_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the shop inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - the business identifier and primary key.
    pub sku: String,

    /// Display name shown in the UI and snapshotted onto order lines.
    pub name: String,

    /// Category reference; `None` when unassigned or the category was
    /// deleted (FK is ON DELETE SET NULL).
    pub category: Option<String>,

    /// Units in stock. Decremented when an order is created, restored
    /// when an order is deleted.
    pub quantity_on_hand: i64,

    /// Unit price in the smallest currency unit.
    pub price_cents: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be fulfilled from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.quantity_on_hand >= quantity
    }
}

// =============================================================================
// Category & Bike Model
// =============================================================================

/// A product category. Bare name record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    pub name: String,
}

/// A bicycle model the shop services or sells accessories for.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct BikeModel {
    pub name: String,
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// UPI transfer.
    Upi,
    /// Direct bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Human-readable label for invoices and receipts.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order. Owns its line items; billing totals are persisted
/// alongside the header so historical orders stay stable even if the
/// default GST rate or product prices change later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    /// Sequential formatted identifier, e.g. `ORD0042`. Unique and
    /// monotonically assigned; never reused after deletion.
    pub id: String,

    pub customer_name: String,
    pub mobile_number: String,
    pub email_address: Option<String>,

    #[ts(as = "String")]
    pub order_date: NaiveDate,

    /// Planned delivery date, if agreed with the customer.
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,

    pub payment_method: Option<PaymentMethod>,

    /// Prepayment received; deducted from the total to compute balance due.
    pub advance_cents: i64,

    pub personalization_required: bool,
    pub personalization_note: Option<String>,

    /// GST rate snapshotted onto the order at creation time.
    pub gst_rate_bps: u32,

    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    #[inline]
    pub fn gst_rate(&self) -> GstRate {
        GstRate::from_bps(self.gst_rate_bps)
    }

    #[inline]
    pub fn advance(&self) -> Money {
        Money::from_cents(self.advance_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A line item within an order.
///
/// Uses the snapshot pattern: product name and unit price are frozen at
/// order time so editing or deleting the product never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderLine {
    pub order_id: String,

    /// Weak reference to the product. `None` once the product has been
    /// deleted; the UI shows "product removed" in that case.
    pub product_sku: Option<String>,

    /// Product name at order time (frozen).
    pub product_name: String,

    /// Quantity ordered (positive).
    pub quantity: i64,

    /// Unit price at order time (frozen).
    pub unit_price_cents: i64,
}

impl OrderLine {
    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity), exact.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// SKU for display; dangling references render as a placeholder
    /// instead of erroring.
    pub fn sku_label(&self) -> &str {
        self.product_sku.as_deref().unwrap_or("product removed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_rate_conversions() {
        let rate = GstRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
        assert_eq!(GstRate::from_percentage(5.0).bps(), 500);
    }

    #[test]
    fn gst_rate_default_is_five_percent() {
        assert_eq!(GstRate::default().bps(), 500);
    }

    #[test]
    fn line_total_is_exact() {
        let line = OrderLine {
            order_id: "ORD0001".to_string(),
            product_sku: Some("HELM-STD".to_string()),
            product_name: "Standard Helmet".to_string(),
            quantity: 3,
            unit_price_cents: 49_999,
        };
        assert_eq!(line.line_total().cents(), 149_997);
    }

    #[test]
    fn dangling_sku_renders_placeholder() {
        let line = OrderLine {
            order_id: "ORD0001".to_string(),
            product_sku: None,
            product_name: "Old Saddle".to_string(),
            quantity: 1,
            unit_price_cents: 1000,
        };
        assert_eq!(line.sku_label(), "product removed");
    }

    #[test]
    fn payment_method_labels() {
        assert_eq!(PaymentMethod::Upi.label(), "UPI");
        assert_eq!(PaymentMethod::BankTransfer.label(), "Bank Transfer");
    }
}
