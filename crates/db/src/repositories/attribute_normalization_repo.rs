//! Repository for attribute normalizations.

use sqlx::PgPool;

use crate::models::standardization::{AttributeNormalization, CreateAttributeNormalization};

/// Column list for `attribute_normalizations` queries.
const NORMALIZATION_COLUMNS: &str = "\
    id, attribute_type, raw_value, normalized_value, created_at, updated_at";

/// Provides CRUD operations for attribute normalizations.
pub struct AttributeNormalizationRepo;

impl AttributeNormalizationRepo {
    /// Insert a new normalization entry. Fails with a unique violation
    /// when the (attribute_type, raw_value) pair already exists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttributeNormalization,
    ) -> Result<AttributeNormalization, sqlx::Error> {
        let query = format!(
            "INSERT INTO attribute_normalizations \
                (attribute_type, raw_value, normalized_value) \
             VALUES ($1, $2, $3) \
             RETURNING {NORMALIZATION_COLUMNS}"
        );
        sqlx::query_as::<_, AttributeNormalization>(&query)
            .bind(&input.attribute_type)
            .bind(&input.raw_value)
            .bind(&input.normalized_value)
            .fetch_one(pool)
            .await
    }

    /// List the whole normalization table. The import pipeline loads it
    /// once per request and matches in memory.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AttributeNormalization>, sqlx::Error> {
        let query = format!(
            "SELECT {NORMALIZATION_COLUMNS} FROM attribute_normalizations \
             ORDER BY attribute_type, raw_value"
        );
        sqlx::query_as::<_, AttributeNormalization>(&query)
            .fetch_all(pool)
            .await
    }
}
