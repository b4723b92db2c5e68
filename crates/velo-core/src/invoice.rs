//! # Invoice Rendering
//!
//! Builds a printable text invoice for an order. Pure formatting over
//! already-persisted data: the caller fetches the order, its lines, and
//! the stored billing breakdown, and this module turns them into a
//! fixed-width document suitable for printing or saving.
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Shop header        name / address / phone / GSTIN                  │
//! │  Order header       invoice no, order date, delivery date           │
//! │  Customer block     name, mobile, email                             │
//! │  Item table         sku | name | qty | unit | total                 │
//! │  Totals             subtotal, GST (rate%), total                    │
//! │  Payment            advance, balance due OR refund due              │
//! │  Footer             personalization note, payment method            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts come from the stored totals, never recomputed here, so an
//! invoice reprinted years later matches the one handed over at the
//! counter.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::billing::BillingBreakdown;
use crate::money::Money;
use crate::types::{Order, OrderLine};

const LINE_WIDTH: usize = 72;

/// Shop identity printed at the top of every invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// GST registration number; omitted from the header when empty.
    pub gstin: String,
    /// Currency symbol prefixed to every amount, e.g. `Rs` or `₹`.
    pub currency_symbol: String,
}

impl Default for ShopInfo {
    fn default() -> Self {
        ShopInfo {
            name: "Velo Cycles".to_string(),
            address: String::new(),
            phone: String::new(),
            gstin: String::new(),
            currency_symbol: "Rs".to_string(),
        }
    }
}

/// A fully assembled invoice, ready to render or serialize to the UI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    pub shop: ShopInfo,
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub billing: BillingBreakdown,
}

impl Invoice {
    /// Assembles an invoice from stored order data.
    pub fn new(shop: ShopInfo, order: Order, lines: Vec<OrderLine>) -> Self {
        let billing = BillingBreakdown::from_order(&order);
        Invoice {
            shop,
            order,
            lines,
            billing,
        }
    }

    /// Renders the invoice as a fixed-width text document.
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(2048);
        let rule = "=".repeat(LINE_WIDTH);
        let thin = "-".repeat(LINE_WIDTH);

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center(&self.shop.name));
        out.push('\n');
        if !self.shop.address.is_empty() {
            out.push_str(&center(&self.shop.address));
            out.push('\n');
        }
        if !self.shop.phone.is_empty() {
            out.push_str(&center(&format!("Phone: {}", self.shop.phone)));
            out.push('\n');
        }
        if !self.shop.gstin.is_empty() {
            out.push_str(&center(&format!("GSTIN: {}", self.shop.gstin)));
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');

        out.push_str(&format!(
            "Invoice: {:<20} Order Date: {}\n",
            self.order.id,
            self.order.order_date.format("%Y-%m-%d")
        ));
        if let Some(delivery) = self.order.delivery_date {
            out.push_str(&format!(
                "{:29}Delivery:   {}\n",
                "",
                delivery.format("%Y-%m-%d")
            ));
        }
        out.push('\n');

        out.push_str(&format!("Customer: {}\n", self.order.customer_name));
        out.push_str(&format!("Mobile:   {}\n", self.order.mobile_number));
        if let Some(email) = &self.order.email_address {
            out.push_str(&format!("Email:    {}\n", email));
        }
        out.push_str(&thin);
        out.push('\n');

        // SKU column fits the full "product removed" placeholder (15 chars)
        out.push_str(&format!(
            "{:<15} {:<27} {:>5} {:>10} {:>11}\n",
            "SKU", "Item", "Qty", "Unit", "Total"
        ));
        out.push_str(&thin);
        out.push('\n');
        for line in &self.lines {
            out.push_str(&format!(
                "{:<15} {:<27} {:>5} {:>10} {:>11}\n",
                truncate(line.sku_label(), 15),
                truncate(&line.product_name, 27),
                line.quantity,
                self.amount(line.unit_price()),
                self.amount(line.line_total()),
            ));
        }
        out.push_str(&thin);
        out.push('\n');

        out.push_str(&self.total_row("Subtotal", self.billing.subtotal()));
        out.push_str(&self.total_row(
            &format!("GST ({:.2}%)", self.billing.gst_rate().percentage()),
            self.billing.tax(),
        ));
        out.push_str(&self.total_row("Total", self.billing.total()));

        if self.billing.advance_cents != 0 {
            out.push_str(&self.total_row("Advance Received", Money::from_cents(self.billing.advance_cents)));
        }
        if self.billing.is_refund_due() {
            out.push_str(&self.total_row("Refund Due", self.billing.balance_due().abs()));
        } else {
            out.push_str(&self.total_row("Balance Due", self.billing.balance_due()));
        }
        out.push_str(&rule);
        out.push('\n');

        if let Some(method) = self.order.payment_method {
            out.push_str(&format!("Payment Method: {}\n", method.label()));
        }
        if self.order.personalization_required {
            let note = self
                .order
                .personalization_note
                .as_deref()
                .unwrap_or("(details to be confirmed)");
            out.push_str(&format!("Personalization: {}\n", note));
        }
        out.push('\n');
        out.push_str(&center("Thank you for riding with us!"));
        out.push('\n');

        out
    }

    fn amount(&self, money: Money) -> String {
        format!("{} {}", self.shop.currency_symbol, money)
    }

    fn total_row(&self, label: &str, amount: Money) -> String {
        let value = self.amount(amount);
        format!("{:>width$}  {:>13}\n", label, value, width = LINE_WIDTH - 15)
    }
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= LINE_WIDTH {
        return text.to_string();
    }
    let pad = (LINE_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn order(advance_cents: i64) -> Order {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap();
        Order {
            id: "ORD0042".to_string(),
            customer_name: "Asha Verma".to_string(),
            mobile_number: "+91 98765 43210".to_string(),
            email_address: Some("asha@example.com".to_string()),
            order_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2026, 3, 21),
            payment_method: Some(PaymentMethod::Upi),
            advance_cents,
            personalization_required: true,
            personalization_note: Some("Engrave 'AV'".to_string()),
            gst_rate_bps: 500,
            subtotal_cents: 220_000,
            tax_cents: 11_000,
            total_cents: 231_000,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                order_id: "ORD0042".to_string(),
                product_sku: Some("SEAT-GEL".to_string()),
                product_name: "Gel Seat".to_string(),
                quantity: 2,
                unit_price_cents: 50_000,
            },
            OrderLine {
                order_id: "ORD0042".to_string(),
                product_sku: None,
                product_name: "Discontinued Bell".to_string(),
                quantity: 1,
                unit_price_cents: 120_000,
            },
        ]
    }

    #[test]
    fn renders_header_and_totals() {
        let invoice = Invoice::new(ShopInfo::default(), order(50_000), lines());
        let text = invoice.render_text();

        assert!(text.contains("Velo Cycles"));
        assert!(text.contains("Invoice: ORD0042"));
        assert!(text.contains("Customer: Asha Verma"));
        assert!(text.contains("GST (5.00%)"));
        assert!(text.contains("Rs 2200.00"));
        assert!(text.contains("Rs 2310.00"));
        assert!(text.contains("Balance Due"));
        assert!(text.contains("Rs 1810.00"));
        assert!(text.contains("Payment Method: UPI"));
        assert!(text.contains("Personalization: Engrave 'AV'"));
    }

    #[test]
    fn dangling_product_shows_placeholder() {
        let invoice = Invoice::new(ShopInfo::default(), order(0), lines());
        let text = invoice.render_text();
        // The placeholder fits the SKU column whole, never truncated
        assert!(text.contains("product removed"));
        assert!(!text.contains("product remov…"));
        assert!(text.contains("Discontinued Bell"));
    }

    #[test]
    fn zero_advance_omits_advance_row() {
        let invoice = Invoice::new(ShopInfo::default(), order(0), lines());
        let text = invoice.render_text();
        assert!(!text.contains("Advance Received"));
        assert!(text.contains("Balance Due"));
    }

    #[test]
    fn overpaid_order_shows_refund_due() {
        let mut overpaid = order(300_000);
        overpaid.advance_cents = 300_000;
        let invoice = Invoice::new(ShopInfo::default(), overpaid, lines());
        let text = invoice.render_text();

        assert!(text.contains("Refund Due"));
        assert!(text.contains("Rs 690.00")); // 3000.00 - 2310.00
        assert!(!text.contains("Balance Due"));
    }

    #[test]
    fn uses_stored_totals_not_recomputed() {
        // Stored totals deliberately disagree with the lines; the invoice
        // must print what was persisted.
        let mut stale = order(0);
        stale.subtotal_cents = 100;
        stale.tax_cents = 5;
        stale.total_cents = 105;
        let invoice = Invoice::new(ShopInfo::default(), stale, lines());
        let text = invoice.render_text();

        assert!(text.contains("Rs 1.05"));
    }
}
