//! # Product Commands
//!
//! Tauri commands for inventory management.
//!
//! ## Inventory Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Manage Inventory Flow                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │ 🔍 Search: "wheel"                [+ Add Product]               │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │ SKU         Name              Category    Stock    Price        │   │
//! │  │ WHEEL-26    26in Alloy Wheel  Wheels      12       Rs 1200.00   │   │
//! │  │ WHEEL-700C  700c Road Wheel   Wheels       8       Rs 1800.00   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('search_products', { query: 'wheel' })                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQL LIKE over sku + name, alphabetical                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is never edited through order commands: creating, updating,
//! and deleting orders move stock inside `velo-db` transactions. These
//! commands only cover direct inventory management.

use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use velo_core::Product;
use velo_db::ProductInput;

/// Lists all products, alphabetically by name.
#[tauri::command]
pub async fn list_products(db: State<'_, DbState>) -> Result<Vec<Product>, ApiError> {
    debug!("list_products command");
    Ok(db.inner_db().products().list().await?)
}

/// Searches products by SKU or name substring.
///
/// Empty query returns the full inventory.
#[tauri::command]
pub async fn search_products(
    db: State<'_, DbState>,
    query: String,
) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");
    Ok(db.inner_db().products().search(&query).await?)
}

/// Gets a single product by its SKU.
#[tauri::command]
pub async fn get_product(db: State<'_, DbState>, sku: String) -> Result<Product, ApiError> {
    debug!(sku = %sku, "get_product command");
    db.inner_db()
        .products()
        .get(&sku)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &sku))
}

/// Creates a new product.
///
/// ## Errors
/// - `VALIDATION_ERROR` - bad SKU/name/price, or duplicate SKU
#[tauri::command]
pub async fn create_product(
    db: State<'_, DbState>,
    input: ProductInput,
) -> Result<Product, ApiError> {
    debug!(sku = %input.sku, "create_product command");
    let product = db.inner_db().products().create(&input).await?;
    info!(sku = %product.sku, "Product created");
    Ok(product)
}

/// Updates an existing product. The SKU itself cannot change.
#[tauri::command]
pub async fn update_product(
    db: State<'_, DbState>,
    sku: String,
    input: ProductInput,
) -> Result<Product, ApiError> {
    debug!(sku = %sku, "update_product command");
    let product = db.inner_db().products().update(&sku, &input).await?;
    info!(sku = %sku, "Product updated");
    Ok(product)
}

/// Deletes a product.
///
/// Orders that reference it keep their name/price snapshots; the lines
/// show "product removed" in place of the SKU.
#[tauri::command]
pub async fn delete_product(db: State<'_, DbState>, sku: String) -> Result<(), ApiError> {
    debug!(sku = %sku, "delete_product command");
    db.inner_db().products().delete(&sku).await?;
    info!(sku = %sku, "Product deleted");
    Ok(())
}

/// Lists products at or below the configured low-stock threshold.
#[tauri::command]
pub async fn low_stock_products(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
) -> Result<Vec<Product>, ApiError> {
    debug!(threshold = config.low_stock_threshold, "low_stock_products command");
    Ok(db
        .inner_db()
        .products()
        .low_stock(config.low_stock_threshold)
        .await?)
}
