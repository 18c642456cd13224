//! Categorization sweep.

use serde_json::json;

use super::{audit_types, entity_types, AuditFinding, ProductSnapshot, Severity};

/// Canonical categories and their expected two-letter SKU prefixes.
pub const CATEGORY_PREFIXES: &[(&str, &str)] = &[
    ("Electronics", "EL"),
    ("Furniture", "FR"),
    ("Clothing", "CL"),
    ("Tools", "TL"),
    ("Home & Garden", "HG"),
];

/// Scan products for categorization problems.
///
/// Outcomes are mutually exclusive; a product yields at most one finding:
/// no category (warning), unrecognized category (warning), or a SKU prefix
/// that does not match the category (critical). The SKU comparison is
/// case-insensitive.
pub fn scan_categorization(products: &[ProductSnapshot]) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for p in products {
        let category = p.category.as_deref().unwrap_or("");
        if category.is_empty() {
            findings.push(AuditFinding {
                audit_type: audit_types::ORPHANED_PRODUCT,
                severity: Severity::Warning,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "Product has no category assigned",
                    "sku": p.sku,
                    "name": p.name,
                }),
            });
            continue;
        }

        let Some(expected_prefix) = expected_prefix(category) else {
            findings.push(AuditFinding {
                audit_type: audit_types::ORPHANED_PRODUCT,
                severity: Severity::Warning,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "Product category not recognized",
                    "sku": p.sku,
                    "category": category,
                    "valid_categories": valid_categories(),
                }),
            });
            continue;
        };

        let sku_prefix: String = p.sku.chars().take(2).collect::<String>().to_uppercase();
        if sku_prefix != expected_prefix {
            findings.push(AuditFinding {
                audit_type: audit_types::ORPHANED_PRODUCT,
                severity: Severity::Critical,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "SKU prefix does not match category",
                    "sku": p.sku,
                    "sku_prefix": sku_prefix,
                    "category": category,
                    "expected_prefix": expected_prefix,
                }),
            });
        }
    }

    findings
}

fn expected_prefix(category: &str) -> Option<&'static str> {
    CATEGORY_PREFIXES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, prefix)| *prefix)
}

fn valid_categories() -> Vec<&'static str> {
    CATEGORY_PREFIXES.iter().map(|(name, _)| *name).collect()
}
