//! Repository for brand compliance rules.

use sqlx::PgPool;

use crate::models::standardization::{BrandComplianceRule, CreateBrandComplianceRule};

/// Column list for `brand_compliance_rules` queries.
const RULE_COLUMNS: &str = "\
    id, brand, rule_type, rule_config, is_active, created_at, updated_at";

/// Provides CRUD operations for brand compliance rules.
pub struct ComplianceRuleRepo;

impl ComplianceRuleRepo {
    /// Insert a new rule. Config defaults to an empty object and the
    /// rule starts active unless stated otherwise.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBrandComplianceRule,
    ) -> Result<BrandComplianceRule, sqlx::Error> {
        let query = format!(
            "INSERT INTO brand_compliance_rules (brand, rule_type, rule_config, is_active) \
             VALUES ($1, $2, COALESCE($3, '{{}}'::jsonb), COALESCE($4, TRUE)) \
             RETURNING {RULE_COLUMNS}"
        );
        sqlx::query_as::<_, BrandComplianceRule>(&query)
            .bind(&input.brand)
            .bind(&input.rule_type)
            .bind(&input.rule_config)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List every rule, active or not. The validator skips inactive
    /// rules itself so previews can show the full rule set.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BrandComplianceRule>, sqlx::Error> {
        let query = format!(
            "SELECT {RULE_COLUMNS} FROM brand_compliance_rules ORDER BY brand, id"
        );
        sqlx::query_as::<_, BrandComplianceRule>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rules configured for one brand, in declaration order.
    pub async fn for_brand(
        pool: &PgPool,
        brand: &str,
    ) -> Result<Vec<BrandComplianceRule>, sqlx::Error> {
        let query = format!(
            "SELECT {RULE_COLUMNS} FROM brand_compliance_rules WHERE brand = $1 ORDER BY id"
        );
        sqlx::query_as::<_, BrandComplianceRule>(&query)
            .bind(brand)
            .fetch_all(pool)
            .await
    }
}
