//! Repository for vendor schema mappings.

use sqlx::PgPool;

use crate::models::standardization::{CreateVendorSchemaMapping, VendorSchemaMapping};

/// Column list for `vendor_schema_mappings` queries.
const MAPPING_COLUMNS: &str = "\
    id, vendor_name, vendor_column, erp_column, transform_rule, \
    created_at, updated_at";

/// Provides CRUD operations for vendor schema mappings.
pub struct VendorSchemaMappingRepo;

impl VendorSchemaMappingRepo {
    /// Insert a new mapping. Fails with a unique violation when the
    /// (vendor_name, vendor_column) pair already exists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVendorSchemaMapping,
    ) -> Result<VendorSchemaMapping, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendor_schema_mappings \
                (vendor_name, vendor_column, erp_column, transform_rule) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MAPPING_COLUMNS}"
        );
        sqlx::query_as::<_, VendorSchemaMapping>(&query)
            .bind(&input.vendor_name)
            .bind(&input.vendor_column)
            .bind(&input.erp_column)
            .bind(&input.transform_rule)
            .fetch_one(pool)
            .await
    }

    /// List all mappings, grouped by vendor for the configuration view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VendorSchemaMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {MAPPING_COLUMNS} FROM vendor_schema_mappings \
             ORDER BY vendor_name, vendor_column"
        );
        sqlx::query_as::<_, VendorSchemaMapping>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch the mapping profile for one vendor, in declaration order.
    pub async fn for_vendor(
        pool: &PgPool,
        vendor_name: &str,
    ) -> Result<Vec<VendorSchemaMapping>, sqlx::Error> {
        let query = format!(
            "SELECT {MAPPING_COLUMNS} FROM vendor_schema_mappings \
             WHERE vendor_name = $1 ORDER BY id"
        );
        sqlx::query_as::<_, VendorSchemaMapping>(&query)
            .bind(vendor_name)
            .fetch_all(pool)
            .await
    }

    /// Distinct vendor names with at least one mapping configured.
    pub async fn vendors(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT vendor_name FROM vendor_schema_mappings ORDER BY vendor_name",
        )
        .fetch_all(pool)
        .await
    }
}
