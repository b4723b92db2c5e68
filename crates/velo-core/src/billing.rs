//! # Billing Calculator
//!
//! Derives subtotal, GST, total, and balance due from an order's line
//! items and advance received.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Billing Breakdown                               │
//! │                                                                     │
//! │  subtotal    = Σ (quantity × unit_price)     exact integer sum      │
//! │  tax         = subtotal × gst_rate           rounded ONCE, half-up  │
//! │  total       = subtotal + tax                identity, always exact │
//! │  balance_due = total − advance               may be NEGATIVE        │
//! │                                                                     │
//! │  A negative balance is surfaced as-is: the customer prepaid more    │
//! │  than the order total, and the UI labels it "refund due". It is     │
//! │  never clamped to zero.                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{GstRate, Order, OrderLine};

/// The complete billing breakdown for an order.
///
/// All amounts in integer cents. Derived, never persisted on its own;
/// the order header stores subtotal/tax/total and the breakdown is
/// reconstructed from those plus the advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillingBreakdown {
    pub subtotal_cents: i64,
    pub gst_rate_bps: u32,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub advance_cents: i64,
    /// Negative when the advance exceeds the total (refund due).
    pub balance_due_cents: i64,
}

impl BillingBreakdown {
    /// Computes the breakdown from line items.
    ///
    /// ## Example
    /// ```rust
    /// use velo_core::billing::BillingBreakdown;
    /// use velo_core::money::Money;
    /// use velo_core::types::{GstRate, OrderLine};
    ///
    /// let lines = vec![
    ///     OrderLine {
    ///         order_id: String::new(),
    ///         product_sku: Some("SEAT-GEL".into()),
    ///         product_name: "Gel Seat".into(),
    ///         quantity: 2,
    ///         unit_price_cents: 50_000, // Rs 500.00
    ///     },
    ///     OrderLine {
    ///         order_id: String::new(),
    ///         product_sku: Some("WHEEL-26".into()),
    ///         product_name: "26in Wheel".into(),
    ///         quantity: 1,
    ///         unit_price_cents: 120_000, // Rs 1200.00
    ///     },
    /// ];
    ///
    /// let billing = BillingBreakdown::from_lines(
    ///     &lines,
    ///     GstRate::from_bps(500),
    ///     Money::from_cents(50_000),
    /// );
    /// assert_eq!(billing.subtotal_cents, 220_000); // Rs 2200.00
    /// assert_eq!(billing.tax_cents, 11_000);       // Rs 110.00
    /// assert_eq!(billing.total_cents, 231_000);    // Rs 2310.00
    /// assert_eq!(billing.balance_due_cents, 181_000); // Rs 1810.00
    /// ```
    pub fn from_lines(lines: &[OrderLine], gst_rate: GstRate, advance: Money) -> Self {
        let subtotal = lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());

        Self::from_subtotal(subtotal, gst_rate, advance)
    }

    /// Computes the breakdown from an already-summed subtotal.
    pub fn from_subtotal(subtotal: Money, gst_rate: GstRate, advance: Money) -> Self {
        let tax = subtotal.calculate_gst(gst_rate);
        let total = subtotal + tax;
        let balance_due = total - advance;

        BillingBreakdown {
            subtotal_cents: subtotal.cents(),
            gst_rate_bps: gst_rate.bps(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
            advance_cents: advance.cents(),
            balance_due_cents: balance_due.cents(),
        }
    }

    /// Reconstructs the breakdown for a stored order from its persisted
    /// totals. Recomputing from lines would give the same result; using
    /// the stored amounts keeps historical invoices byte-stable.
    pub fn from_stored(
        subtotal_cents: i64,
        gst_rate_bps: u32,
        tax_cents: i64,
        total_cents: i64,
        advance_cents: i64,
    ) -> Self {
        BillingBreakdown {
            subtotal_cents,
            gst_rate_bps,
            tax_cents,
            total_cents,
            advance_cents,
            balance_due_cents: total_cents - advance_cents,
        }
    }

    /// Reconstructs the breakdown from a stored order header.
    pub fn from_order(order: &Order) -> Self {
        Self::from_stored(
            order.subtotal_cents,
            order.gst_rate_bps,
            order.tax_cents,
            order.total_cents,
            order.advance_cents,
        )
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    #[inline]
    pub fn balance_due(&self) -> Money {
        Money::from_cents(self.balance_due_cents)
    }

    /// True when the advance exceeded the total and money is owed back.
    #[inline]
    pub fn is_refund_due(&self) -> bool {
        self.balance_due_cents < 0
    }

    #[inline]
    pub fn gst_rate(&self) -> GstRate {
        GstRate::from_bps(self.gst_rate_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: i64, unit_price_cents: i64) -> OrderLine {
        OrderLine {
            order_id: "ORD0001".to_string(),
            product_sku: Some("SKU".to_string()),
            product_name: "Part".to_string(),
            quantity: qty,
            unit_price_cents,
        }
    }

    #[test]
    fn reference_case() {
        // [(2 × 500.00), (1 × 1200.00)], GST 5%, advance 500.00
        let lines = vec![line(2, 50_000), line(1, 120_000)];
        let billing =
            BillingBreakdown::from_lines(&lines, GstRate::from_bps(500), Money::from_cents(50_000));

        assert_eq!(billing.subtotal_cents, 220_000);
        assert_eq!(billing.tax_cents, 11_000);
        assert_eq!(billing.total_cents, 231_000);
        assert_eq!(billing.balance_due_cents, 181_000);
        assert!(!billing.is_refund_due());
    }

    #[test]
    fn total_is_subtotal_plus_tax() {
        // Awkward amounts that force rounding in the tax step
        for (qty, price, bps) in [
            (1i64, 333i64, 500u32),
            (3, 999, 1250),
            (7, 12_345, 1800),
            (1, 1, 500),
        ] {
            let billing = BillingBreakdown::from_lines(
                &[line(qty, price)],
                GstRate::from_bps(bps),
                Money::zero(),
            );
            assert_eq!(
                billing.total_cents,
                billing.subtotal_cents + billing.tax_cents
            );
        }
    }

    #[test]
    fn subtotal_equals_sum_of_line_totals() {
        let lines = vec![line(2, 333), line(5, 999), line(1, 12_345)];
        let billing =
            BillingBreakdown::from_lines(&lines, GstRate::from_bps(500), Money::zero());

        let summed: i64 = lines.iter().map(|l| l.line_total().cents()).sum();
        assert_eq!(billing.subtotal_cents, summed);
    }

    #[test]
    fn empty_lines_yield_zero() {
        let billing = BillingBreakdown::from_lines(&[], GstRate::from_bps(500), Money::zero());
        assert_eq!(billing.subtotal_cents, 0);
        assert_eq!(billing.tax_cents, 0);
        assert_eq!(billing.total_cents, 0);
        assert_eq!(billing.balance_due_cents, 0);
    }

    #[test]
    fn overpaid_advance_surfaces_negative_balance() {
        let billing = BillingBreakdown::from_lines(
            &[line(1, 10_000)],
            GstRate::from_bps(500),
            Money::from_cents(20_000),
        );
        // total 105.00, advance 200.00 -> refund of 95.00 due
        assert_eq!(billing.balance_due_cents, -9_500);
        assert!(billing.is_refund_due());
    }

    #[test]
    fn from_order_reads_the_persisted_header() {
        use crate::types::Order;
        use chrono::{NaiveDate, TimeZone, Utc};

        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap();
        let order = Order {
            id: "ORD0007".to_string(),
            customer_name: "Asha Verma".to_string(),
            mobile_number: "9876543210".to_string(),
            email_address: None,
            order_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            delivery_date: None,
            payment_method: None,
            advance_cents: 50_000,
            personalization_required: false,
            personalization_note: None,
            gst_rate_bps: 500,
            subtotal_cents: 220_000,
            tax_cents: 11_000,
            total_cents: 231_000,
            created_at: ts,
            updated_at: ts,
        };

        let billing = BillingBreakdown::from_order(&order);
        assert_eq!(billing.subtotal_cents, 220_000);
        assert_eq!(billing.gst_rate_bps, 500);
        assert_eq!(billing.tax_cents, 11_000);
        assert_eq!(billing.total_cents, 231_000);
        assert_eq!(billing.advance_cents, 50_000);
        assert_eq!(billing.balance_due_cents, 181_000);
    }

    #[test]
    fn stored_round_trip_matches_computed() {
        let computed = BillingBreakdown::from_lines(
            &[line(2, 50_000)],
            GstRate::from_bps(500),
            Money::from_cents(10_000),
        );
        let stored = BillingBreakdown::from_stored(
            computed.subtotal_cents,
            computed.gst_rate_bps,
            computed.tax_cents,
            computed.total_cents,
            computed.advance_cents,
        );
        assert_eq!(computed, stored);
    }
}
