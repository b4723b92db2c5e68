//! # Order Commands
//!
//! Tauri commands for the order lifecycle.
//!
//! ## Order Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Create Order Flow                                    │
//! │                                                                         │
//! │  Frontend                    Backend                                    │
//! │  ────────                    ───────                                    │
//! │  invoke('create_order')                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────┐    ┌──────────────────────────────────────────────┐   │
//! │  │ DraftState  │───►│ 1. Validate draft (all fields, all lines)    │   │
//! │  │ (snapshot)  │    │ 2. BEGIN TRANSACTION                         │   │
//! │  └─────────────┘    │ 3. Check stock per line                      │   │
//! │                     │ 4. Allocate next ORD-number                  │   │
//! │                     │ 5. Insert header with computed totals        │   │
//! │                     │ 6. Insert lines, decrement stock             │   │
//! │                     │ 7. COMMIT                                    │   │
//! │                     └──────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Draft reset, OrderDetail returned for the confirmation screen          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft is only reset after the transaction commits, so a stock
//! failure leaves the user's work intact for correction.

use serde::Serialize;
use tauri::State;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState, DraftState};
use velo_core::{BillingBreakdown, Order, OrderDraft, OrderLine};

/// A full order as shown on the detail screen: header, lines, and the
/// billing breakdown derived from the stored totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub billing: BillingBreakdown,
}

async fn load_detail(db: &State<'_, DbState>, id: &str) -> Result<OrderDetail, ApiError> {
    let orders = db.inner_db().orders();
    let order = orders
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;
    let lines = orders.lines(id).await?;
    let billing = BillingBreakdown::from_order(&order);
    Ok(OrderDetail { order, lines, billing })
}

/// Creates an order from the current draft.
///
/// Validation, stock checks, ID allocation, and stock decrements all
/// run inside one transaction in `velo-db`. On success the draft is
/// reset and the persisted order returned.
///
/// ## Errors
/// - `DRAFT_ERROR` - the draft failed validation (message lists every field)
/// - `INSUFFICIENT_STOCK` - a line asks for more than is on hand
#[tauri::command]
pub async fn create_order(
    db: State<'_, DbState>,
    draft: State<'_, DraftState>,
    config: State<'_, ConfigState>,
) -> Result<OrderDetail, ApiError> {
    debug!("create_order command");

    let snapshot = draft.with_draft(|d| d.clone());
    let order = db
        .inner_db()
        .orders()
        .create(&snapshot, config.default_gst_rate_bps)
        .await?;

    draft.reset();
    info!(order_id = %order.id, total_cents = order.total_cents, "Order created");

    load_detail(&db, &order.id).await
}

/// Lists all orders, newest first.
#[tauri::command]
pub async fn list_orders(db: State<'_, DbState>) -> Result<Vec<Order>, ApiError> {
    debug!("list_orders command");
    Ok(db.inner_db().orders().list().await?)
}

/// Gets one order with its lines and billing breakdown.
#[tauri::command]
pub async fn get_order(db: State<'_, DbState>, id: String) -> Result<OrderDetail, ApiError> {
    debug!(order_id = %id, "get_order command");
    load_detail(&db, &id).await
}

/// Replaces an order's details and lines.
///
/// Stock moves by the difference between the old and new lines, and the
/// order keeps its stored GST rate unless the payload sets a new one.
/// The order ID never changes.
#[tauri::command]
pub async fn update_order(
    db: State<'_, DbState>,
    id: String,
    draft: OrderDraft,
) -> Result<OrderDetail, ApiError> {
    debug!(order_id = %id, "update_order command");

    db.inner_db().orders().update(&id, &draft).await?;
    info!(order_id = %id, "Order updated");

    load_detail(&db, &id).await
}

/// Deletes an order and returns its line quantities to stock.
///
/// The order's number is never reused.
#[tauri::command]
pub async fn delete_order(db: State<'_, DbState>, id: String) -> Result<(), ApiError> {
    debug!(order_id = %id, "delete_order command");

    db.inner_db().orders().delete(&id).await?;
    warn!(order_id = %id, "Order deleted, stock restored");
    Ok(())
}

/// Peeks at the order ID the next creation would take.
///
/// Display only: concurrent creations can take the number first.
#[tauri::command]
pub async fn next_order_id(db: State<'_, DbState>) -> Result<String, ApiError> {
    debug!("next_order_id command");
    Ok(db.inner_db().orders().next_order_id().await?)
}
