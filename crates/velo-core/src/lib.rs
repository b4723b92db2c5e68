//! # velo-core: Pure Business Logic for Velo OMS
//!
//! This crate is the **heart** of Velo OMS, a bicycle-shop order and
//! inventory manager. It contains all business logic as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Velo OMS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    Frontend (WebView)                         │ │
//! │  │   Create Order ──► Manage Orders ──► Manage Inventory         │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │ Tauri IPC                          │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                    Tauri Commands                             │ │
//! │  │   create_order, list_products, generate_invoice, ...          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ velo-core (THIS CRATE) ★                      │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────────┐         │ │
//! │  │   │  types  │ │  money  │ │ billing │ │ validation │         │ │
//! │  │   │ Product │ │  Money  │ │ GST math│ │   rules    │         │ │
//! │  │   │  Order  │ │ GstRate │ │ balance │ │   checks   │         │ │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └────────────┘         │ │
//! │  │   ┌─────────┐ ┌─────────┐                                    │ │
//! │  │   │  order  │ │ invoice │                                    │ │
//! │  │   │ drafts  │ │ export  │                                    │ │
//! │  │   └─────────┘ └─────────┘                                    │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                    velo-db (Database Layer)                   │ │
//! │  │             SQLite queries, migrations, repositories          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderLine, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`billing`] - Subtotal / GST / total / balance-due computation
//! - [`order`] - Order draft assembly and validation
//! - [`invoice`] - Invoice document model and text rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Example
//!
//! ```rust
//! use velo_core::money::Money;
//! use velo_core::types::GstRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(50_000); // Rs 500.00
//!
//! // GST at the default 5% rate
//! let gst = price.calculate_gst(GstRate::from_bps(500));
//! assert_eq!(gst.cents(), 2_500); // Rs 25.00
//! ```

pub mod billing;
pub mod error;
pub mod invoice;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

pub use billing::BillingBreakdown;
pub use error::{CoreError, ValidationError};
pub use invoice::{Invoice, ShopInfo};
pub use money::Money;
pub use order::{DraftLine, OrderDraft};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GST rate in basis points (500 = 5%).
///
/// Orders carry their own rate so historical invoices stay stable if the
/// default ever changes; this constant is only the fallback for new drafts.
pub const DEFAULT_GST_RATE_BPS: u32 = 500;

/// Prefix for formatted order identifiers (`ORD0001`, `ORD0002`, ...).
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Minimum zero-padding width of the numeric part of an order ID.
/// Counters past 9999 widen naturally (`ORD10000`) rather than failing.
pub const ORDER_ID_PAD_WIDTH: usize = 4;

/// Maximum number of line items on a single order.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single line item.
/// Guards against typos like 1000 instead of 10.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Formats an allocated sequence number as an order identifier.
///
/// ```rust
/// use velo_core::format_order_id;
///
/// assert_eq!(format_order_id(1), "ORD0001");
/// assert_eq!(format_order_id(42), "ORD0042");
/// assert_eq!(format_order_id(10_000), "ORD10000"); // widens, never truncates
/// ```
pub fn format_order_id(number: i64) -> String {
    format!(
        "{}{:0width$}",
        ORDER_ID_PREFIX,
        number,
        width = ORDER_ID_PAD_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_is_zero_padded() {
        assert_eq!(format_order_id(1), "ORD0001");
        assert_eq!(format_order_id(999), "ORD0999");
        assert_eq!(format_order_id(9999), "ORD9999");
    }

    #[test]
    fn order_id_widens_past_padding() {
        assert_eq!(format_order_id(10_000), "ORD10000");
        assert_eq!(format_order_id(123_456), "ORD123456");
    }
}
