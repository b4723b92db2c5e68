//! # Draft Commands
//!
//! Tauri commands for assembling the in-progress order draft.
//!
//! ## Draft Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Create Order Screen                                  │
//! │                                                                         │
//! │  Pick product ────► draft_add_item ─────► snapshot name/price into     │
//! │                                           the draft line                │
//! │  Edit form ───────► draft_set_details ──► customer/date/payment        │
//! │  Qty spinner ─────► draft_set_quantity ─► change or remove line        │
//! │  Totals panel ────► draft_billing ──────► live subtotal/GST/balance    │
//! │  Create button ───► create_order (order.rs) ─► persist + reset draft   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is only advisory here: the authoritative check runs inside the
//! order-creation transaction. Checking at add time just gives the user
//! an early warning instead of a failure at the end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::{ApiError, ErrorCode};
use crate::state::{ConfigState, DbState, DraftState};
use velo_core::{BillingBreakdown, DraftLine, OrderDraft, PaymentMethod};

/// Header fields of the draft, set from the customer form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDetails {
    pub customer_name: String,
    pub mobile_number: String,
    pub email_address: Option<String>,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub advance_cents: i64,
    pub personalization_required: bool,
    pub personalization_note: Option<String>,
    pub gst_rate_bps: Option<u32>,
}

/// Gets the current draft for display.
#[tauri::command]
pub fn get_draft(draft: State<'_, DraftState>) -> OrderDraft {
    debug!("get_draft command");
    draft.with_draft(|d| d.clone())
}

/// Adds a product to the draft, snapshotting its name and price.
///
/// Same SKU twice merges into one line with summed quantity.
#[tauri::command]
pub async fn draft_add_item(
    db: State<'_, DbState>,
    draft: State<'_, DraftState>,
    sku: String,
    quantity: i64,
) -> Result<OrderDraft, ApiError> {
    debug!(sku = %sku, quantity = quantity, "draft_add_item command");

    if quantity <= 0 {
        return Err(ApiError::validation("Quantity must be positive"));
    }

    let product = db
        .inner_db()
        .products()
        .get(&sku)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &sku))?;

    // Early warning only; create_order re-checks transactionally
    let already_drafted = draft.with_draft(|d| {
        d.lines
            .iter()
            .filter(|l| l.product_sku == sku)
            .map(|l| l.quantity)
            .sum::<i64>()
    });
    if !product.can_fulfill(already_drafted + quantity) {
        return Err(ApiError::new(
            ErrorCode::InsufficientStock,
            format!(
                "Insufficient stock for {}: {} available, {} requested",
                sku,
                product.quantity_on_hand,
                already_drafted + quantity
            ),
        ));
    }

    draft.with_draft_mut(|d| {
        d.add_line(DraftLine {
            product_sku: product.sku.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price_cents: product.price_cents,
        });
    });

    Ok(draft.with_draft(|d| d.clone()))
}

/// Sets the quantity of a draft line. Zero removes the line.
#[tauri::command]
pub fn draft_set_quantity(
    draft: State<'_, DraftState>,
    sku: String,
    quantity: i64,
) -> Result<OrderDraft, ApiError> {
    debug!(sku = %sku, quantity = quantity, "draft_set_quantity command");

    if quantity < 0 {
        return Err(ApiError::validation("Quantity must not be negative"));
    }

    let found = draft.with_draft_mut(|d| d.set_line_quantity(&sku, quantity));
    if !found {
        return Err(ApiError::draft(format!("Product {} not in draft", sku)));
    }

    Ok(draft.with_draft(|d| d.clone()))
}

/// Removes a line from the draft.
#[tauri::command]
pub fn draft_remove_item(
    draft: State<'_, DraftState>,
    sku: String,
) -> Result<OrderDraft, ApiError> {
    debug!(sku = %sku, "draft_remove_item command");

    let found = draft.with_draft_mut(|d| d.remove_line(&sku));
    if !found {
        return Err(ApiError::draft(format!("Product {} not in draft", sku)));
    }

    Ok(draft.with_draft(|d| d.clone()))
}

/// Sets the draft's header fields from the customer form.
///
/// No validation here: the form is allowed to hold partial input, and
/// everything is validated as a whole when the order is created.
#[tauri::command]
pub fn draft_set_details(draft: State<'_, DraftState>, details: DraftDetails) -> OrderDraft {
    debug!("draft_set_details command");

    draft.with_draft_mut(|d| {
        d.customer_name = details.customer_name;
        d.mobile_number = details.mobile_number;
        d.email_address = details.email_address;
        d.order_date = details.order_date;
        d.delivery_date = details.delivery_date;
        d.payment_method = details.payment_method;
        d.advance_cents = details.advance_cents;
        d.personalization_required = details.personalization_required;
        d.personalization_note = details.personalization_note;
        d.gst_rate_bps = details.gst_rate_bps;
    });

    draft.with_draft(|d| d.clone())
}

/// Clears the draft back to an empty one dated today.
#[tauri::command]
pub fn draft_clear(draft: State<'_, DraftState>) -> OrderDraft {
    debug!("draft_clear command");
    draft.reset();
    draft.with_draft(|d| d.clone())
}

/// Computes the live billing preview for the totals panel.
#[tauri::command]
pub fn draft_billing(
    draft: State<'_, DraftState>,
    config: State<'_, ConfigState>,
) -> BillingBreakdown {
    debug!("draft_billing command");
    draft.with_draft(|d| d.billing(config.default_gst_rate_bps))
}
