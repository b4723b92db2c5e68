//! # Order Builder
//!
//! Assembles an order draft from raw form fields and validates it as a
//! whole. Pure construction: nothing is persisted until the draft is
//! handed to the order store.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Create Order Flow                             │
//! │                                                                     │
//! │  Form fields + line items                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  OrderDraft (this module)                                           │
//! │       │                                                             │
//! │       ├── validate() ──► Err(Vec<ValidationError>)                  │
//! │       │                  every failing field, not just the first    │
//! │       │                                                             │
//! │       ├── billing()  ──► BillingBreakdown (preview totals)          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  OrderRepository::create(draft) ──► Order with assigned ORD id      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::billing::BillingBreakdown;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{GstRate, OrderLine, PaymentMethod};
use crate::validation;

/// A line item on a draft order.
///
/// Name and unit price are snapshotted from the product the moment the
/// line is added, decoupling the draft from later price edits.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DraftLine {
    pub product_sku: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl DraftLine {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// An order under assembly: raw customer fields plus draft lines.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    pub customer_name: String,
    pub mobile_number: String,
    pub email_address: Option<String>,

    #[ts(as = "String")]
    pub order_date: NaiveDate,

    /// Past delivery dates are accepted: the shop backfills orders taken
    /// on paper, so this is display data rather than a constraint.
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,

    pub payment_method: Option<PaymentMethod>,
    pub advance_cents: i64,
    pub personalization_required: bool,
    pub personalization_note: Option<String>,

    /// Per-order GST override; `None` means "use the configured default".
    pub gst_rate_bps: Option<u32>,

    pub lines: Vec<DraftLine>,
}

impl OrderDraft {
    /// An empty draft dated today, ready for the Create Order view.
    pub fn empty(today: NaiveDate) -> Self {
        OrderDraft {
            customer_name: String::new(),
            mobile_number: String::new(),
            email_address: None,
            order_date: today,
            delivery_date: None,
            payment_method: None,
            advance_cents: 0,
            personalization_required: false,
            personalization_note: None,
            gst_rate_bps: None,
            lines: Vec::new(),
        }
    }

    /// The GST rate this draft will be billed at.
    pub fn gst_rate(&self, default_bps: u32) -> GstRate {
        GstRate::from_bps(self.gst_rate_bps.unwrap_or(default_bps))
    }

    /// Validates the draft, collecting every failing field.
    ///
    /// Returns `Ok(())` only when the draft can be persisted as-is.
    /// The error vector is ordered: header fields first, then each line
    /// in sequence, so messages map naturally onto the form layout.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = validation::validate_customer_name(&self.customer_name) {
            errors.push(e);
        }
        if let Err(e) = validation::validate_mobile(&self.mobile_number) {
            errors.push(e);
        }
        if let Some(email) = self.email_address.as_deref() {
            // Optional field: blank means "not provided", not malformed
            if !email.trim().is_empty() {
                if let Err(e) = validation::validate_email(email) {
                    errors.push(e);
                }
            }
        }
        if let Err(e) = validation::validate_advance_cents(self.advance_cents) {
            errors.push(e);
        }
        if let Some(bps) = self.gst_rate_bps {
            if let Err(e) = validation::validate_gst_rate_bps(bps) {
                errors.push(e);
            }
        }

        if let Err(e) = validation::validate_line_count(self.lines.len()) {
            errors.push(e);
        }
        for line in &self.lines {
            if let Err(e) = validation::validate_sku(&line.product_sku) {
                errors.push(e);
            }
            if let Err(e) = validation::validate_quantity(line.quantity) {
                errors.push(e);
            }
            if let Err(e) = validation::validate_price_cents(line.unit_price_cents) {
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Computes the billing preview for the draft as it stands.
    pub fn billing(&self, default_gst_bps: u32) -> BillingBreakdown {
        let subtotal = self
            .lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());

        BillingBreakdown::from_subtotal(
            subtotal,
            self.gst_rate(default_gst_bps),
            Money::from_cents(self.advance_cents),
        )
    }

    /// Materializes the draft lines as order lines for a given order ID.
    pub fn to_order_lines(&self, order_id: &str) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|line| OrderLine {
                order_id: order_id.to_string(),
                product_sku: Some(line.product_sku.clone()),
                product_name: line.product_name.clone(),
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect()
    }

    /// Adds a line, merging quantity when the SKU is already present.
    pub fn add_line(&mut self, line: DraftLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_sku == line.product_sku)
        {
            existing.quantity += line.quantity;
            return;
        }
        self.lines.push(line);
    }

    /// Sets the quantity of an existing line; zero removes the line.
    pub fn set_line_quantity(&mut self, sku: &str, quantity: i64) -> bool {
        if quantity == 0 {
            return self.remove_line(sku);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_sku == sku) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Removes a line by SKU. Returns false if no such line existed.
    pub fn remove_line(&mut self, sku: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_sku != sku);
        self.lines.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Asha Verma".to_string(),
            mobile_number: "+91 98765 43210".to_string(),
            email_address: Some("asha@example.com".to_string()),
            order_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2026, 3, 21),
            payment_method: Some(PaymentMethod::Upi),
            advance_cents: 50_000,
            personalization_required: true,
            personalization_note: Some("Engrave 'AV' on the frame".to_string()),
            gst_rate_bps: None,
            lines: vec![
                DraftLine {
                    product_sku: "SEAT-GEL".to_string(),
                    product_name: "Gel Seat".to_string(),
                    quantity: 2,
                    unit_price_cents: 50_000,
                },
                DraftLine {
                    product_sku: "WHEEL-26".to_string(),
                    product_name: "26in Wheel".to_string(),
                    quantity: 1,
                    unit_price_cents: 120_000,
                },
            ],
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn empty_lines_are_rejected() {
        let mut draft = valid_draft();
        draft.lines.clear();

        let errors = draft.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::Empty { field } if field == "items")));
    }

    #[test]
    fn all_failing_fields_are_enumerated() {
        let mut draft = valid_draft();
        draft.customer_name = "  ".to_string();
        draft.mobile_number = "12".to_string();
        draft.advance_cents = -1;
        draft.lines[0].quantity = 0;

        let errors = draft.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert!(fields.contains(&"customer_name"));
        assert!(fields.contains(&"mobile_number"));
        assert!(fields.contains(&"advance"));
        assert!(fields.contains(&"quantity"));
    }

    #[test]
    fn blank_email_is_not_an_error() {
        let mut draft = valid_draft();
        draft.email_address = Some("   ".to_string());
        assert!(draft.validate().is_ok());

        draft.email_address = Some("not-an-email".to_string());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn past_delivery_date_is_accepted() {
        let mut draft = valid_draft();
        draft.delivery_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn billing_preview_uses_default_rate_when_unset() {
        let draft = valid_draft();
        let billing = draft.billing(500);
        assert_eq!(billing.subtotal_cents, 220_000);
        assert_eq!(billing.tax_cents, 11_000);
        assert_eq!(billing.total_cents, 231_000);
        assert_eq!(billing.balance_due_cents, 181_000);
    }

    #[test]
    fn per_order_rate_overrides_default() {
        let mut draft = valid_draft();
        draft.gst_rate_bps = Some(1200);
        assert_eq!(draft.billing(500).gst_rate_bps, 1200);
    }

    #[test]
    fn add_line_merges_same_sku() {
        let mut draft = valid_draft();
        draft.add_line(DraftLine {
            product_sku: "SEAT-GEL".to_string(),
            product_name: "Gel Seat".to_string(),
            quantity: 3,
            unit_price_cents: 50_000,
        });

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].quantity, 5);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut draft = valid_draft();
        assert!(draft.set_line_quantity("SEAT-GEL", 0));
        assert_eq!(draft.lines.len(), 1);
        assert!(!draft.set_line_quantity("NOPE", 2));
    }

    #[test]
    fn to_order_lines_snapshots_everything() {
        let draft = valid_draft();
        let lines = draft.to_order_lines("ORD0007");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].order_id, "ORD0007");
        assert_eq!(lines[0].product_sku.as_deref(), Some("SEAT-GEL"));
        assert_eq!(lines[0].unit_price_cents, 50_000);
    }
}
