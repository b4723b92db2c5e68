//! # Invoice Commands
//!
//! Tauri command for generating an invoice from a stored order.
//!
//! The invoice is built from the totals persisted on the order header,
//! never recomputed from the lines, so a printed invoice always matches
//! what the order showed at creation time.

use serde::Serialize;
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use velo_core::Invoice;

/// Invoice payload for the frontend: the structured data for on-screen
/// rendering plus a fixed-width text rendering for print/export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub invoice: Invoice,
    pub text: String,
}

/// Generates the invoice for an order.
#[tauri::command]
pub async fn generate_invoice(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    id: String,
) -> Result<InvoiceResponse, ApiError> {
    debug!(order_id = %id, "generate_invoice command");

    let orders = db.inner_db().orders();
    let order = orders
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", &id))?;
    let lines = orders.lines(&id).await?;

    let invoice = Invoice::new(config.shop_info(), order, lines);
    let text = invoice.render_text();

    info!(order_id = %id, "Invoice generated");
    Ok(InvoiceResponse { invoice, text })
}
