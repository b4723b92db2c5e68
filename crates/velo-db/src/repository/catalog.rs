//! # Catalog Repository
//!
//! Database operations for the two lookup tables: product categories and
//! bike models. Both are bare name records keyed by the name itself.
//!
//! Deleting a category detaches its products (FK is ON DELETE SET NULL)
//! rather than deleting them.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use velo_core::validation;
use velo_core::{BikeModel, Category};

/// Repository for category and bike model operations.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Lists all categories, alphabetically.
    pub async fn list_categories(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT name FROM categories ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Adds a category. Duplicate names surface as
    /// [`DbError::UniqueViolation`].
    pub async fn add_category(&self, name: &str) -> DbResult<Category> {
        validation::validate_catalog_name(name).map_err(velo_core::CoreError::from)?;
        let name = name.trim();

        debug!(name = %name, "Adding category");

        sqlx::query("INSERT INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Category {
            name: name.to_string(),
        })
    }

    /// Deletes a category. Products in it keep existing with a NULL
    /// category.
    pub async fn delete_category(&self, name: &str) -> DbResult<()> {
        debug!(name = %name, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", name));
        }

        Ok(())
    }

    // =========================================================================
    // Bike Models
    // =========================================================================

    /// Lists all bike models, alphabetically.
    pub async fn list_bike_models(&self) -> DbResult<Vec<BikeModel>> {
        let models = sqlx::query_as::<_, BikeModel>(
            "SELECT name FROM bike_models ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }

    /// Adds a bike model.
    pub async fn add_bike_model(&self, name: &str) -> DbResult<BikeModel> {
        validation::validate_catalog_name(name).map_err(velo_core::CoreError::from)?;
        let name = name.trim();

        debug!(name = %name, "Adding bike model");

        sqlx::query("INSERT INTO bike_models (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(BikeModel {
            name: name.to_string(),
        })
    }

    /// Deletes a bike model.
    pub async fn delete_bike_model(&self, name: &str) -> DbResult<()> {
        debug!(name = %name, "Deleting bike model");

        let result = sqlx::query("DELETE FROM bike_models WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Bike model", name));
        }

        Ok(())
    }
}
