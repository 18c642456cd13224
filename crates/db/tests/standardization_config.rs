//! Integration tests for the standardization configuration repositories:
//! - Seeded vendor profiles and normalization table
//! - Create operations and unique constraint violations
//! - Conversion into the typed core representations

use sqlx::PgPool;
use vendora_core::compliance::RuleKind;
use vendora_core::transform::TransformRule;
use vendora_db::models::standardization::{
    CreateAttributeNormalization, CreateBrandComplianceRule, CreateVendorSchemaMapping,
};
use vendora_db::repositories::{
    AttributeNormalizationRepo, ComplianceRuleRepo, VendorSchemaMappingRepo,
};

// ---------------------------------------------------------------------------
// Vendor schema mappings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_vendor_profiles(pool: PgPool) {
    let vendors = VendorSchemaMappingRepo::vendors(&pool).await.unwrap();
    assert_eq!(vendors, vec!["acme_supply", "global_parts"]);

    let acme = VendorSchemaMappingRepo::for_vendor(&pool, "acme_supply")
        .await
        .unwrap();
    assert_eq!(acme.len(), 4);
    assert_eq!(acme[0].vendor_column, "item_num");
    assert_eq!(acme[0].erp_column, "sku");

    // Unknown vendor yields an empty profile, not an error.
    let none = VendorSchemaMappingRepo::for_vendor(&pool, "no_such_vendor")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_transforms_parse(pool: PgPool) {
    let acme = VendorSchemaMappingRepo::for_vendor(&pool, "acme_supply")
        .await
        .unwrap();

    let mat = acme.iter().find(|m| m.vendor_column == "mat").unwrap();
    let mapping = mat.to_column_mapping();
    assert!(matches!(mapping.transform, Some(TransformRule::Uppercase)));

    let sku = acme.iter().find(|m| m.vendor_column == "item_num").unwrap();
    assert!(sku.to_column_mapping().transform.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mapping_and_duplicate_rejected(pool: PgPool) {
    let input = CreateVendorSchemaMapping {
        vendor_name: "new_vendor".to_string(),
        vendor_column: "prod_code".to_string(),
        erp_column: "sku".to_string(),
        transform_rule: Some(serde_json::json!({"type": "trim"})),
    };
    let created = VendorSchemaMappingRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.vendor_name, "new_vendor");
    assert_eq!(created.erp_column, "sku");

    let result = VendorSchemaMappingRepo::create(&pool, &input).await;
    assert!(
        result.is_err(),
        "Duplicate (vendor_name, vendor_column) should fail"
    );
}

// ---------------------------------------------------------------------------
// Attribute normalizations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_normalization_table(pool: PgPool) {
    let entries = AttributeNormalizationRepo::list_all(&pool).await.unwrap();
    assert!(entries.len() >= 30);

    let ss = entries
        .iter()
        .find(|e| e.attribute_type == "material" && e.raw_value == "SS")
        .unwrap();
    assert_eq!(ss.normalized_value, "STAINLESS_STEEL");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_normalization_and_duplicate_rejected(pool: PgPool) {
    let input = CreateAttributeNormalization {
        attribute_type: "material".to_string(),
        raw_value: "Titanium".to_string(),
        normalized_value: "TITANIUM".to_string(),
    };
    let created = AttributeNormalizationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.normalized_value, "TITANIUM");

    let result = AttributeNormalizationRepo::create(&pool, &input).await;
    assert!(
        result.is_err(),
        "Duplicate (attribute_type, raw_value) should fail"
    );
}

// ---------------------------------------------------------------------------
// Brand compliance rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_rules_convert_to_typed_kinds(pool: PgPool) {
    let rules = ComplianceRuleRepo::for_brand(&pool, "Brand_1").await.unwrap();
    assert_eq!(rules.len(), 3);

    let kinds: Vec<_> = rules.iter().map(|r| r.to_compliance_rule().kind).collect();
    assert!(kinds.iter().any(|k| matches!(
        k,
        RuleKind::NamingConvention { pattern: Some(_), .. }
    )));
    assert!(kinds
        .iter()
        .any(|k| matches!(k, RuleKind::RequiredField { fields } if fields.len() == 4)));
    assert!(kinds.iter().any(|k| matches!(
        k,
        RuleKind::PriceRange { max_cost_ratio: Some(_), .. }
    )));

    // Brand_2 carries a rule type the validator does not evaluate.
    let brand2 = ComplianceRuleRepo::for_brand(&pool, "Brand_2").await.unwrap();
    assert!(brand2
        .iter()
        .any(|r| matches!(r.to_compliance_rule().kind, RuleKind::Unknown)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rule_defaults(pool: PgPool) {
    let input = CreateBrandComplianceRule {
        brand: "Brand_3".to_string(),
        rule_type: "required_field".to_string(),
        rule_config: None,
        is_active: None,
    };
    let created = ComplianceRuleRepo::create(&pool, &input).await.unwrap();
    assert!(created.is_active);
    assert_eq!(created.rule_config, serde_json::json!({}));

    // Empty config means no listed fields, a well-formed no-op rule.
    assert!(matches!(
        created.to_compliance_rule().kind,
        RuleKind::RequiredField { fields } if fields.is_empty()
    ));
}
