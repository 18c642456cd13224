//! Repository for product assets.

use sqlx::PgPool;
use vendora_core::types::DbId;

use crate::models::catalog::{CreateProductAsset, ProductAsset};

/// Column list for `product_assets` queries.
const ASSET_COLUMNS: &str = "\
    id, product_id, asset_type, url, alt_text, is_active, \
    last_checked_at, created_at, updated_at";

/// Provides CRUD operations for product assets.
pub struct ProductAssetRepo;

impl ProductAssetRepo {
    /// Insert a new product asset. Defaults to active.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductAsset,
    ) -> Result<ProductAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_assets \
                (product_id, asset_type, url, alt_text, is_active, last_checked_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, TRUE), $6) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, ProductAsset>(&query)
            .bind(input.product_id)
            .bind(&input.asset_type)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(input.is_active)
            .bind(input.last_checked_at)
            .fetch_one(pool)
            .await
    }

    /// List all assets for a product.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductAsset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM product_assets WHERE product_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ProductAsset>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// List every asset, ordered by ID. The asset health sweep filters
    /// inactive assets itself.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProductAsset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM product_assets ORDER BY id");
        sqlx::query_as::<_, ProductAsset>(&query)
            .fetch_all(pool)
            .await
    }
}
