//! # Catalog Commands
//!
//! Tauri commands for the two lookup lists: product categories and bike
//! models. Both back dropdowns in the product and order forms.

use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use velo_core::{BikeModel, Category};

/// Lists all product categories.
#[tauri::command]
pub async fn list_categories(db: State<'_, DbState>) -> Result<Vec<Category>, ApiError> {
    debug!("list_categories command");
    Ok(db.inner_db().catalog().list_categories().await?)
}

/// Adds a product category.
#[tauri::command]
pub async fn add_category(db: State<'_, DbState>, name: String) -> Result<Category, ApiError> {
    debug!(name = %name, "add_category command");
    let category = db.inner_db().catalog().add_category(&name).await?;
    info!(name = %category.name, "Category added");
    Ok(category)
}

/// Deletes a product category. Products keep existing, uncategorized.
#[tauri::command]
pub async fn delete_category(db: State<'_, DbState>, name: String) -> Result<(), ApiError> {
    debug!(name = %name, "delete_category command");
    db.inner_db().catalog().delete_category(&name).await?;
    info!(name = %name, "Category deleted");
    Ok(())
}

/// Lists all bike models.
#[tauri::command]
pub async fn list_bike_models(db: State<'_, DbState>) -> Result<Vec<BikeModel>, ApiError> {
    debug!("list_bike_models command");
    Ok(db.inner_db().catalog().list_bike_models().await?)
}

/// Adds a bike model.
#[tauri::command]
pub async fn add_bike_model(db: State<'_, DbState>, name: String) -> Result<BikeModel, ApiError> {
    debug!(name = %name, "add_bike_model command");
    let model = db.inner_db().catalog().add_bike_model(&name).await?;
    info!(name = %model.name, "Bike model added");
    Ok(model)
}

/// Deletes a bike model.
#[tauri::command]
pub async fn delete_bike_model(db: State<'_, DbState>, name: String) -> Result<(), ApiError> {
    debug!(name = %name, "delete_bike_model command");
    db.inner_db().catalog().delete_bike_model(&name).await?;
    info!(name = %name, "Bike model deleted");
    Ok(())
}
