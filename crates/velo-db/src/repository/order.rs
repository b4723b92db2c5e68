//! # Order Repository
//!
//! Database operations for orders, their line items, the order ID
//! sequence, and the stock movements that accompany every order write.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE (one transaction)                                           │
//! │     ├── validate draft                                                 │
//! │     ├── check stock for every line                                     │
//! │     ├── allocate next ID: UPDATE sequence ... RETURNING                │
//! │     ├── insert header (totals snapshotted)                             │
//! │     ├── insert lines (name/price snapshotted)                          │
//! │     └── decrement stock                                                │
//! │                                                                         │
//! │  2. UPDATE (one transaction)                                           │
//! │     ├── diff old lines vs new lines per SKU                            │
//! │     ├── qty up   → check + decrement the difference                    │
//! │     ├── qty down → restore the difference                              │
//! │     └── replace lines, rewrite header totals                           │
//! │                                                                         │
//! │  3. DELETE (one transaction)                                           │
//! │     ├── restore stock for lines whose product still exists             │
//! │     └── delete header (lines cascade)                                  │
//! │                                                                         │
//! │  The sequence counter only ever moves forward: deleting ORD0002       │
//! │  never causes ORD0002 to be reissued.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};
use velo_core::{format_order_id, CoreError, Order, OrderDraft, OrderLine};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates an order from a validated draft.
    ///
    /// Runs entirely in one transaction: stock checks, ID allocation,
    /// header and line inserts, and stock decrements either all commit
    /// or none do. A failed order never burns a sequence number that
    /// another committed order would skip over; the allocation rolls
    /// back with everything else.
    pub async fn create(&self, draft: &OrderDraft, default_gst_bps: u32) -> DbResult<Order> {
        draft.validate().map_err(CoreError::from)?;

        let mut tx = self.pool.begin().await?;

        // Stock check before any write, so the error names the first
        // offending SKU rather than a half-applied order.
        for line in &draft.lines {
            check_stock(&mut tx, &line.product_sku, line.quantity).await?;
        }

        let id = allocate_order_id(&mut tx).await?;
        debug!(id = %id, lines = draft.lines.len(), "Creating order");

        let billing = draft.billing(default_gst_bps);
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, customer_name, mobile_number, email_address,
                order_date, delivery_date, payment_method, advance_cents,
                personalization_required, personalization_note,
                gst_rate_bps, subtotal_cents, tax_cents, total_cents,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7, ?8,
                ?9, ?10,
                ?11, ?12, ?13, ?14,
                ?15, ?15
            )
            "#,
        )
        .bind(&id)
        .bind(draft.customer_name.trim())
        .bind(draft.mobile_number.trim())
        .bind(&draft.email_address)
        .bind(draft.order_date)
        .bind(draft.delivery_date)
        .bind(draft.payment_method)
        .bind(draft.advance_cents)
        .bind(draft.personalization_required)
        .bind(&draft.personalization_note)
        .bind(draft.gst_rate_bps.unwrap_or(default_gst_bps))
        .bind(billing.subtotal_cents)
        .bind(billing.tax_cents)
        .bind(billing.total_cents)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        insert_lines(&mut tx, &id, draft).await?;

        for line in &draft.lines {
            decrement_stock(&mut tx, &line.product_sku, line.quantity).await?;
        }

        tx.commit().await?;

        self.get(&id)
            .await?
            .ok_or_else(|| DbError::not_found("Order", &id))
    }

    /// Gets an order header by its formatted ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, mobile_number, email_address,
                   order_date, delivery_date, payment_method, advance_cents,
                   personalization_required, personalization_note,
                   gst_rate_bps, subtotal_cents, tax_cents, total_cents,
                   created_at, updated_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets the line items for an order, in entry order.
    pub async fn lines(&self, id: &str) -> DbResult<Vec<OrderLine>> {
        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT order_id, product_sku, product_name, quantity, unit_price_cents
            FROM order_lines
            WHERE order_id = ?1
            ORDER BY position
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Lists all orders, newest first.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, mobile_number, email_address,
                   order_date, delivery_date, payment_method, advance_cents,
                   personalization_required, personalization_note,
                   gst_rate_bps, subtotal_cents, tax_cents, total_cents,
                   created_at, updated_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Replaces an order's contents with a new draft.
    ///
    /// Stock is reconciled per SKU by difference, not restore-all then
    /// re-take: an unchanged line moves no stock at all. The order keeps
    /// its ID and its GST rate unless the draft overrides the rate.
    pub async fn update(&self, id: &str, draft: &OrderDraft) -> DbResult<Order> {
        draft.validate().map_err(CoreError::from)?;

        let mut tx = self.pool.begin().await?;

        let existing_gst: Option<u32> =
            sqlx::query_scalar("SELECT gst_rate_bps FROM orders WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let existing_gst = existing_gst.ok_or_else(|| DbError::not_found("Order", id))?;

        debug!(id = %id, lines = draft.lines.len(), "Updating order");

        // Per-SKU quantity diff between stored lines and the new draft.
        // Lines whose product was deleted have a NULL SKU: their stock is
        // gone for good and is excluded from reconciliation.
        let old_lines: Vec<(Option<String>, i64)> =
            sqlx::query_as("SELECT product_sku, quantity FROM order_lines WHERE order_id = ?1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let mut old_qty: HashMap<String, i64> = HashMap::new();
        for (sku, qty) in old_lines.into_iter() {
            if let Some(sku) = sku {
                *old_qty.entry(sku).or_insert(0) += qty;
            }
        }

        let mut new_qty: HashMap<String, i64> = HashMap::new();
        for line in &draft.lines {
            *new_qty.entry(line.product_sku.clone()).or_insert(0) += line.quantity;
        }

        let skus: HashSet<&String> = old_qty.keys().chain(new_qty.keys()).collect();
        for sku in skus {
            let before = old_qty.get(sku).copied().unwrap_or(0);
            let after = new_qty.get(sku).copied().unwrap_or(0);

            if after > before {
                let needed = after - before;
                check_stock(&mut tx, sku, needed).await?;
                decrement_stock(&mut tx, sku, needed).await?;
            } else if before > after {
                restore_stock(&mut tx, sku, before - after).await?;
            }
        }

        sqlx::query("DELETE FROM order_lines WHERE order_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_lines(&mut tx, id, draft).await?;

        let gst_bps = draft.gst_rate_bps.unwrap_or(existing_gst);
        let billing = draft.billing(gst_bps);
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE orders SET
                customer_name = ?2, mobile_number = ?3, email_address = ?4,
                order_date = ?5, delivery_date = ?6, payment_method = ?7,
                advance_cents = ?8, personalization_required = ?9,
                personalization_note = ?10, gst_rate_bps = ?11,
                subtotal_cents = ?12, tax_cents = ?13, total_cents = ?14,
                updated_at = ?15
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.customer_name.trim())
        .bind(draft.mobile_number.trim())
        .bind(&draft.email_address)
        .bind(draft.order_date)
        .bind(draft.delivery_date)
        .bind(draft.payment_method)
        .bind(draft.advance_cents)
        .bind(draft.personalization_required)
        .bind(&draft.personalization_note)
        .bind(gst_bps)
        .bind(billing.subtotal_cents)
        .bind(billing.tax_cents)
        .bind(billing.total_cents)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get(id)
            .await?
            .ok_or_else(|| DbError::not_found("Order", id))
    }

    /// Deletes an order and restores its stock.
    ///
    /// Lines whose product has since been deleted restore nothing: the
    /// stock row no longer exists. The sequence counter is untouched, so
    /// the ID is never reissued.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        debug!(id = %id, "Deleting order");

        let lines: Vec<(Option<String>, i64)> =
            sqlx::query_as("SELECT product_sku, quantity FROM order_lines WHERE order_id = ?1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        for (sku, qty) in &lines {
            if let Some(sku) = sku {
                restore_stock(&mut tx, sku, *qty).await?;
            }
        }

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Peeks at the next order ID without allocating it.
    ///
    /// Display only: concurrent creation may take this number first.
    pub async fn next_order_id(&self) -> DbResult<String> {
        let last: i64 =
            sqlx::query_scalar("SELECT last_number FROM order_id_sequence WHERE id = 1")
                .fetch_one(&self.pool)
                .await?;

        Ok(format_order_id(last + 1))
    }
}

// =============================================================================
// Transaction Helpers
// =============================================================================

/// Allocates the next order ID by bumping the sequence row.
///
/// Single UPDATE ... RETURNING statement: atomic under SQLite's write
/// lock, so two concurrent transactions can never read the same number.
async fn allocate_order_id(tx: &mut Transaction<'_, Sqlite>) -> DbResult<String> {
    let number: i64 = sqlx::query_scalar(
        r#"
        UPDATE order_id_sequence
        SET last_number = last_number + 1
        WHERE id = 1
        RETURNING last_number
        "#,
    )
    .fetch_one(&mut **tx)
    .await?;

    Ok(format_order_id(number))
}

/// Verifies the product exists and has enough stock for `quantity`.
async fn check_stock(
    tx: &mut Transaction<'_, Sqlite>,
    sku: &str,
    quantity: i64,
) -> DbResult<()> {
    let available: Option<i64> =
        sqlx::query_scalar("SELECT quantity_on_hand FROM products WHERE sku = ?1")
            .bind(sku)
            .fetch_optional(&mut **tx)
            .await?;

    let available = available.ok_or_else(|| DbError::not_found("Product", sku))?;

    if available < quantity {
        return Err(DbError::InsufficientStock {
            sku: sku.to_string(),
            available,
            requested: quantity,
        });
    }

    Ok(())
}

async fn decrement_stock(
    tx: &mut Transaction<'_, Sqlite>,
    sku: &str,
    quantity: i64,
) -> DbResult<()> {
    sqlx::query(
        "UPDATE products SET quantity_on_hand = quantity_on_hand - ?2, updated_at = ?3 \
         WHERE sku = ?1",
    )
    .bind(sku)
    .bind(quantity)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Adds stock back. A no-op when the product has been deleted.
async fn restore_stock(
    tx: &mut Transaction<'_, Sqlite>,
    sku: &str,
    quantity: i64,
) -> DbResult<()> {
    sqlx::query(
        "UPDATE products SET quantity_on_hand = quantity_on_hand + ?2, updated_at = ?3 \
         WHERE sku = ?1",
    )
    .bind(sku)
    .bind(quantity)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Inserts the draft's lines, preserving entry order via `position`.
async fn insert_lines(
    tx: &mut Transaction<'_, Sqlite>,
    order_id: &str,
    draft: &OrderDraft,
) -> DbResult<()> {
    for (position, line) in draft.lines.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO order_lines (
                order_id, product_sku, product_name, quantity,
                unit_price_cents, position
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(order_id)
        .bind(&line.product_sku)
        .bind(&line.product_name)
        .bind(line.quantity)
        .bind(line.unit_price_cents)
        .bind(position as i64)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

// =============================================================================
// Integration Tests (in-memory database)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::repository::product::ProductInput;
    use chrono::NaiveDate;
    use velo_core::{DraftLine, PaymentMethod};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_product(db: &Database, sku: &str, stock: i64, price_cents: i64) {
        db.products()
            .create(&ProductInput {
                sku: sku.to_string(),
                name: format!("{} product", sku),
                category: None,
                quantity_on_hand: stock,
                price_cents,
            })
            .await
            .unwrap();
    }

    fn draft(lines: Vec<DraftLine>) -> OrderDraft {
        OrderDraft {
            customer_name: "Asha Verma".to_string(),
            mobile_number: "9876543210".to_string(),
            email_address: None,
            order_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            delivery_date: None,
            payment_method: Some(PaymentMethod::Cash),
            advance_cents: 0,
            personalization_required: false,
            personalization_note: None,
            gst_rate_bps: None,
            lines,
        }
    }

    fn line(sku: &str, qty: i64, price_cents: i64) -> DraftLine {
        DraftLine {
            product_sku: sku.to_string(),
            product_name: format!("{} product", sku),
            quantity: qty,
            unit_price_cents: price_cents,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 100, 50_000).await;

        let orders = db.orders();
        let a = orders.create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();
        let b = orders.create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();
        let c = orders.create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();

        assert_eq!(a.id, "ORD0001");
        assert_eq!(b.id, "ORD0002");
        assert_eq!(c.id, "ORD0003");

        orders.delete("ORD0002").await.unwrap();

        let d = orders.create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();
        assert_eq!(d.id, "ORD0004"); // never back to ORD0002
    }

    #[tokio::test]
    async fn create_decrements_and_delete_restores_stock() {
        let db = test_db().await;
        seed_product(&db, "WHEEL", 10, 120_000).await;

        let order = db
            .orders()
            .create(&draft(vec![line("WHEEL", 3, 120_000)]), 500)
            .await
            .unwrap();

        let product = db.products().get("WHEEL").await.unwrap().unwrap();
        assert_eq!(product.quantity_on_hand, 7);

        db.orders().delete(&order.id).await.unwrap();
        let product = db.products().get("WHEEL").await.unwrap().unwrap();
        assert_eq!(product.quantity_on_hand, 10);
    }

    #[tokio::test]
    async fn insufficient_stock_rejects_whole_order() {
        let db = test_db().await;
        seed_product(&db, "BELL", 2, 5_000).await;
        seed_product(&db, "TUBE", 50, 8_000).await;

        let err = db
            .orders()
            .create(&draft(vec![line("TUBE", 5, 8_000), line("BELL", 3, 5_000)]), 500)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::InsufficientStock { ref sku, available: 2, requested: 3 } if sku == "BELL"
        ));

        // Nothing committed: TUBE stock untouched, no order row, no ID burned
        let tube = db.products().get("TUBE").await.unwrap().unwrap();
        assert_eq!(tube.quantity_on_hand, 50);
        assert!(db.orders().list().await.unwrap().is_empty());
        assert_eq!(db.orders().next_order_id().await.unwrap(), "ORD0001");
    }

    #[tokio::test]
    async fn totals_are_persisted_on_the_header() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 10, 50_000).await;
        seed_product(&db, "WHEEL", 10, 120_000).await;

        let mut d = draft(vec![line("SEAT", 2, 50_000), line("WHEEL", 1, 120_000)]);
        d.advance_cents = 50_000;

        let order = db.orders().create(&d, 500).await.unwrap();
        assert_eq!(order.subtotal_cents, 220_000);
        assert_eq!(order.tax_cents, 11_000);
        assert_eq!(order.total_cents, 231_000);
        assert_eq!(order.gst_rate_bps, 500);
    }

    #[tokio::test]
    async fn update_reconciles_stock_by_difference() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 10, 50_000).await;
        seed_product(&db, "BELL", 10, 5_000).await;

        let order = db
            .orders()
            .create(&draft(vec![line("SEAT", 4, 50_000)]), 500)
            .await
            .unwrap();
        // SEAT: 10 → 6

        // SEAT 4 → 1 (restore 3), BELL 0 → 2 (take 2)
        db.orders()
            .update(&order.id, &draft(vec![line("SEAT", 1, 50_000), line("BELL", 2, 5_000)]))
            .await
            .unwrap();

        let seat = db.products().get("SEAT").await.unwrap().unwrap();
        let bell = db.products().get("BELL").await.unwrap().unwrap();
        assert_eq!(seat.quantity_on_hand, 9);
        assert_eq!(bell.quantity_on_hand, 8);

        let lines = db.orders().lines(&order.id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_sku.as_deref(), Some("SEAT"));
        assert_eq!(lines[0].quantity, 1);
    }

    #[tokio::test]
    async fn update_keeps_the_stored_gst_rate() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 10, 50_000).await;

        let mut d = draft(vec![line("SEAT", 1, 50_000)]);
        d.gst_rate_bps = Some(1200);
        let order = db.orders().create(&d, 500).await.unwrap();
        assert_eq!(order.gst_rate_bps, 1200);

        // Update without specifying a rate: the order keeps 12%
        let updated = db
            .orders()
            .update(&order.id, &draft(vec![line("SEAT", 2, 50_000)]))
            .await
            .unwrap();
        assert_eq!(updated.gst_rate_bps, 1200);
        assert_eq!(updated.tax_cents, 12_000); // 1000.00 × 12%
    }

    #[tokio::test]
    async fn deleted_product_leaves_snapshot_lines() {
        let db = test_db().await;
        seed_product(&db, "SADDLE", 5, 30_000).await;

        let order = db
            .orders()
            .create(&draft(vec![line("SADDLE", 1, 30_000)]), 500)
            .await
            .unwrap();

        db.products().delete("SADDLE").await.unwrap();

        let lines = db.orders().lines(&order.id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_sku, None);
        assert_eq!(lines[0].product_name, "SADDLE product");
        assert_eq!(lines[0].unit_price_cents, 30_000);

        // Deleting the order now restores nothing (stock row is gone)
        db.orders().delete(&order.id).await.unwrap();
        assert!(db.products().get("SADDLE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_any_write() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 10, 50_000).await;

        let mut bad = draft(vec![line("SEAT", 1, 50_000)]);
        bad.customer_name = String::new();

        let err = db.orders().create(&bad, 500).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidOrder(_)));

        let seat = db.products().get("SEAT").await.unwrap().unwrap();
        assert_eq!(seat.quantity_on_hand, 10);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let db = test_db().await;
        seed_product(&db, "SEAT", 10, 50_000).await;

        db.orders().create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();
        db.orders().create(&draft(vec![line("SEAT", 1, 50_000)]), 500).await.unwrap();

        let orders = db.orders().list().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "ORD0002");
        assert_eq!(orders[1].id, "ORD0001");
    }
}
