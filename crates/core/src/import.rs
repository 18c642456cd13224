//! Import classification pipeline: map, normalize, validate.
//!
//! Classification is a pure per-row computation with no persistence side
//! effect: `imported`/`skipped` count compliant and non-compliant rows, but
//! no catalog record is written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compliance::{validate_brand_compliance, ComplianceRule, Violation};
use crate::mapping::{map_vendor_row, ColumnMapping};
use crate::normalize::{normalize_attribute, NormalizationEntry, KNOWN_ATTRIBUTE_COLUMNS};

/// Read-only configuration snapshot for one import run.
///
/// Loaded once per request; the pipeline only ever reads it, so concurrent
/// imports need no locking.
#[derive(Debug, Clone, Default)]
pub struct StandardizationContext {
    /// Column mappings for the importing vendor.
    pub mappings: Vec<ColumnMapping>,
    /// Full attribute normalization table.
    pub normalizations: Vec<NormalizationEntry>,
    /// All brand compliance rules (active and inactive, all brands).
    pub rules: Vec<ComplianceRule>,
}

/// Classification of a single raw row.
#[derive(Debug, Clone, Serialize)]
pub struct RowClassification {
    pub original: Map<String, Value>,
    pub mapped: Map<String, Value>,
    pub violations: Vec<Violation>,
}

/// Violations attached to one rejected row. `row_index` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    pub row_index: usize,
    pub violations: Vec<Violation>,
}

/// Aggregate result of classifying a batch of rows.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub total: usize,
    pub errors: Vec<RowError>,
}

/// Classify one raw vendor row: map to canonical columns, normalize known
/// attribute columns, then validate against the row's brand (falling back
/// to the vendor name when the mapped record carries no brand).
pub fn classify_row(
    ctx: &StandardizationContext,
    vendor: &str,
    row: &Map<String, Value>,
) -> RowClassification {
    let mut mapped = map_vendor_row(&ctx.mappings, row);

    for attr in KNOWN_ATTRIBUTE_COLUMNS {
        if let Some(Value::String(raw)) = mapped.get(*attr) {
            let normalized = normalize_attribute(&ctx.normalizations, attr, raw);
            mapped.insert((*attr).to_string(), Value::String(normalized));
        }
    }

    let brand = mapped
        .get("brand")
        .and_then(Value::as_str)
        .unwrap_or(vendor)
        .to_string();
    let violations = validate_brand_compliance(&ctx.rules, &brand, &mapped);

    RowClassification {
        original: row.clone(),
        mapped,
        violations,
    }
}

/// Classify a batch of rows and summarize: rows with zero violations count
/// as `imported`, the rest as `skipped` with their violations recorded
/// under a 1-based row index.
pub fn classify_rows(
    ctx: &StandardizationContext,
    vendor: &str,
    rows: &[Map<String, Value>],
) -> ImportSummary {
    let mut imported = 0;
    let mut skipped = 0;
    let mut errors = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let classified = classify_row(ctx, vendor, row);
        if classified.violations.is_empty() {
            imported += 1;
        } else {
            skipped += 1;
            errors.push(RowError {
                row_index: index + 1,
                violations: classified.violations,
            });
        }
    }

    ImportSummary {
        imported,
        skipped,
        total: rows.len(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::RuleKind;
    use crate::transform::TransformRule;
    use serde_json::json;

    fn ctx() -> StandardizationContext {
        StandardizationContext {
            mappings: vec![
                ColumnMapping {
                    vendor_column: "item_num".to_string(),
                    erp_column: "sku".to_string(),
                    transform: None,
                },
                ColumnMapping {
                    vendor_column: "mat".to_string(),
                    erp_column: "material".to_string(),
                    transform: Some(TransformRule::Uppercase),
                },
                ColumnMapping {
                    vendor_column: "brand_name".to_string(),
                    erp_column: "brand".to_string(),
                    transform: None,
                },
            ],
            normalizations: vec![NormalizationEntry {
                attribute_type: "material".to_string(),
                raw_value: "SS".to_string(),
                normalized_value: "STAINLESS_STEEL".to_string(),
            }],
            rules: vec![ComplianceRule {
                brand: "Brand_1".to_string(),
                kind: RuleKind::RequiredField {
                    fields: vec!["sku".to_string(), "material".to_string()],
                },
                is_active: true,
            }],
        }
    }

    fn row(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn pipeline_maps_then_normalizes_then_validates() {
        let raw = row(&[
            ("item_num", "B1-AB0001"),
            ("mat", "ss"),
            ("brand_name", "Brand_1"),
        ]);
        let result = classify_row(&ctx(), "acme_supply", &raw);

        assert_eq!(result.original, raw);
        assert_eq!(result.mapped.get("sku"), Some(&json!("B1-AB0001")));
        // "ss" uppercased to "SS" by the transform, then normalized.
        assert_eq!(result.mapped.get("material"), Some(&json!("STAINLESS_STEEL")));
        assert!(result.violations.is_empty());
    }

    #[test]
    fn brand_falls_back_to_vendor_when_unmapped() {
        let mut context = ctx();
        context.rules[0].brand = "acme_supply".to_string();
        let raw = row(&[("item_num", "B1-AB0001")]);

        let result = classify_row(&context, "acme_supply", &raw);
        // Vendor-scoped rule applies: material is missing.
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].field, "material");
    }

    #[test]
    fn vendor_without_mappings_classifies_raw_row() {
        let context = StandardizationContext::default();
        let raw = row(&[("sku", "EL-0001"), ("name", "Widget")]);
        let result = classify_row(&context, "unknown_vendor", &raw);
        assert_eq!(result.mapped, raw);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn summary_counts_and_one_based_row_indexes() {
        let rows = vec![
            row(&[
                ("item_num", "B1-AB0001"),
                ("mat", "SS"),
                ("brand_name", "Brand_1"),
            ]),
            // Missing material: one violation.
            row(&[("item_num", "B1-AB0002"), ("brand_name", "Brand_1")]),
            // Not Brand_1: no rules apply.
            row(&[("item_num", "X-1")]),
        ];
        let summary = classify_rows(&ctx(), "acme_supply", &rows);

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].row_index, 2);
        assert_eq!(summary.errors[0].violations.len(), 1);
    }

    #[test]
    fn empty_batch_summarizes_to_zero() {
        let summary = classify_rows(&ctx(), "acme_supply", &[]);
        assert_eq!(summary.imported, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.total, 0);
        assert!(summary.errors.is_empty());
    }
}
