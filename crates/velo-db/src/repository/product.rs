//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD keyed by SKU
//! - Name/SKU substring search
//! - Stock level adjustment
//!
//! ## Deletion Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Happens On delete()                             │
//! │                                                                         │
//! │  DELETE FROM products WHERE sku = 'SEAT-GEL'                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  order_lines.product_sku  ──► set to NULL (ON DELETE SET NULL)         │
//! │  order_lines.product_name ──► unchanged (snapshot)                     │
//! │  order_lines.unit_price   ──► unchanged (snapshot)                     │
//! │                                                                         │
//! │  Historical orders keep rendering; the line shows "product removed"    │
//! │  in place of the SKU. Nothing is cascaded away.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use velo_core::validation;
use velo_core::Product;

/// Input for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub quantity_on_hand: i64,
    pub price_cents: i64,
}

impl ProductInput {
    fn validate(&self) -> DbResult<()> {
        validation::validate_sku(&self.sku).map_err(velo_core::CoreError::from)?;
        validation::validate_product_name(&self.name).map_err(velo_core::CoreError::from)?;
        validation::validate_stock_level(self.quantity_on_hand)
            .map_err(velo_core::CoreError::from)?;
        validation::validate_price_cents(self.price_cents).map_err(velo_core::CoreError::from)?;
        Ok(())
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list().await?;
/// let one = repo.get("SEAT-GEL").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT sku, name, category, quantity_on_hand, price_cents,
                   created_at, updated_at
            FROM products
            ORDER BY name COLLATE NOCASE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Searches products by SKU or name substring (case-insensitive).
    ///
    /// Empty query returns everything, same as [`list`](Self::list).
    pub async fn search(&self, query: &str) -> DbResult<Vec<Product>> {
        let query = query.trim();

        if query.is_empty() {
            return self.list().await;
        }

        debug!(query = %query, "Searching products");

        let pattern = format!("%{}%", query);
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT sku, name, category, quantity_on_hand, price_cents,
                   created_at, updated_at
            FROM products
            WHERE sku LIKE ?1 OR name LIKE ?1
            ORDER BY name COLLATE NOCASE
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by SKU.
    pub async fn get(&self, sku: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT sku, name, category, quantity_on_hand, price_cents,
                   created_at, updated_at
            FROM products
            WHERE sku = ?1
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Creates a new product.
    ///
    /// Fails with [`DbError::UniqueViolation`] if the SKU already exists
    /// and [`DbError::ForeignKeyViolation`] if the category doesn't.
    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        input.validate()?;

        debug!(sku = %input.sku, "Creating product");

        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO products (sku, name, category, quantity_on_hand, price_cents,
                                  created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            "#,
        )
        .bind(input.sku.trim())
        .bind(input.name.trim())
        .bind(&input.category)
        .bind(input.quantity_on_hand)
        .bind(input.price_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get(input.sku.trim())
            .await?
            .ok_or_else(|| DbError::not_found("Product", &input.sku))
    }

    /// Updates an existing product. The SKU itself is immutable: order
    /// lines reference it, so renaming a SKU means create + delete.
    pub async fn update(&self, sku: &str, input: &ProductInput) -> DbResult<Product> {
        input.validate()?;

        debug!(sku = %sku, "Updating product");

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, category = ?3, quantity_on_hand = ?4,
                price_cents = ?5, updated_at = ?6
            WHERE sku = ?1
            "#,
        )
        .bind(sku)
        .bind(input.name.trim())
        .bind(&input.category)
        .bind(input.quantity_on_hand)
        .bind(input.price_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", sku));
        }

        self.get(sku)
            .await?
            .ok_or_else(|| DbError::not_found("Product", sku))
    }

    /// Deletes a product by SKU.
    ///
    /// Existing order lines keep their snapshots; their `product_sku`
    /// becomes NULL via the FK's ON DELETE SET NULL.
    pub async fn delete(&self, sku: &str) -> DbResult<()> {
        debug!(sku = %sku, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE sku = ?1")
            .bind(sku)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", sku));
        }

        Ok(())
    }

    /// Lists products at or below a stock threshold, most depleted first.
    pub async fn low_stock(&self, threshold: i64) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT sku, name, category, quantity_on_hand, price_cents,
                   created_at, updated_at
            FROM products
            WHERE quantity_on_hand <= ?1
            ORDER BY quantity_on_hand ASC, name COLLATE NOCASE
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
