//! # Draft State
//!
//! Manages the order draft currently being assembled in the Create
//! Order view.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the draft
//! 2. Only one command should modify the draft at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft State Operations                               │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Draft State Change    │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Pick Product ───────────► draft_add_item() ────► lines.push(line)     │
//! │                                                                         │
//! │  Change Quantity ────────► draft_set_quantity() ► lines[i].qty = n     │
//! │                                                                         │
//! │  Click Remove ───────────► draft_remove_item() ─► lines.remove(i)      │
//! │                                                                         │
//! │  Edit Customer Form ─────► draft_set_details() ─► header fields         │
//! │                                                                         │
//! │  Click Create ───────────► create_order() ──────► persist + reset       │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The draft logic itself (merging lines, validation, billing preview)
//! lives in `velo_core::OrderDraft`; this file only manages access.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use velo_core::OrderDraft;

/// Tauri-managed order draft state.
///
/// ## Why Not RwLock?
/// Draft operations are quick, and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<OrderDraft>>,
}

impl DraftState {
    /// Creates a new empty draft dated today.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(OrderDraft::empty(Utc::now().date_naive()))),
        }
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let billing = draft_state.with_draft(|d| d.billing(500));
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// draft_state.with_draft_mut(|d| d.add_line(line));
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }

    /// Resets the draft to a fresh one dated today.
    pub fn reset(&self) {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        *draft = OrderDraft::empty(Utc::now().date_naive());
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velo_core::DraftLine;

    fn line(sku: &str, qty: i64) -> DraftLine {
        DraftLine {
            product_sku: sku.to_string(),
            product_name: format!("{} product", sku),
            quantity: qty,
            unit_price_cents: 10_000,
        }
    }

    #[test]
    fn reset_clears_lines() {
        let state = DraftState::new();
        state.with_draft_mut(|d| d.add_line(line("SEAT", 2)));
        assert_eq!(state.with_draft(|d| d.lines.len()), 1);

        state.reset();
        assert!(state.with_draft(|d| d.lines.is_empty()));
    }

    #[test]
    fn concurrent_handles_see_the_same_draft() {
        let state = DraftState::new();
        state.with_draft_mut(|d| d.add_line(line("SEAT", 2)));
        state.with_draft_mut(|d| d.add_line(line("SEAT", 3)));

        // Same SKU merged by OrderDraft::add_line
        assert_eq!(state.with_draft(|d| d.lines[0].quantity), 5);
    }
}
