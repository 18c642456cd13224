//! Repository for the product catalog.

use sqlx::PgPool;
use vendora_core::types::DbId;

use crate::models::catalog::{CreateProduct, Product};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "\
    id, sku, name, category, brand, vendor_id, \
    cost, msrp, retail_price, status, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. The default status is 'active'.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                (sku, name, category, brand, vendor_id, cost, msrp, retail_price, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'active')) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.brand)
            .bind(input.vendor_id)
            .bind(input.cost)
            .bind(input.msrp)
            .bind(input.retail_price)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full catalog, ordered by ID. The audit sweeps read this
    /// snapshot in one bulk query before evaluating per-row checks.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }
}
