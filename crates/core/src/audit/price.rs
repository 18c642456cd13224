//! Price discrepancy sweep.

use serde_json::json;

use super::{audit_types, entity_types, AuditFinding, ProductSnapshot, Severity};

/// Scan products for pricing anomalies.
///
/// Three independent checks run in order over the whole snapshot:
/// cost above MSRP (critical), cost above retail price (critical), and
/// margin below `threshold` (warning). A product can fire the first and
/// third check at the same time; each hit is its own finding.
pub fn scan_price_discrepancies(products: &[ProductSnapshot], threshold: f64) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for p in products {
        let (Some(cost), Some(msrp)) = (p.cost, p.msrp) else {
            continue;
        };
        if cost > msrp {
            findings.push(AuditFinding {
                audit_type: audit_types::PRICE_DISCREPANCY,
                severity: Severity::Critical,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "Cost exceeds MSRP",
                    "sku": p.sku,
                    "cost": cost,
                    "msrp": msrp,
                    "difference": cost - msrp,
                }),
            });
        }
    }

    for p in products {
        let (Some(cost), Some(retail)) = (p.cost, p.retail_price) else {
            continue;
        };
        if cost > retail {
            findings.push(AuditFinding {
                audit_type: audit_types::PRICE_DISCREPANCY,
                severity: Severity::Critical,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "Cost exceeds retail price",
                    "sku": p.sku,
                    "cost": cost,
                    "retail_price": retail,
                    "difference": cost - retail,
                }),
            });
        }
    }

    for p in products {
        let (Some(cost), Some(retail)) = (p.cost, p.retail_price) else {
            continue;
        };
        if cost >= retail {
            continue;
        }
        let margin = (retail - cost) / cost;
        if margin < threshold {
            findings.push(AuditFinding {
                audit_type: audit_types::PRICE_DISCREPANCY,
                severity: Severity::Warning,
                entity_type: entity_types::PRODUCT,
                entity_id: p.id,
                details: json!({
                    "message": "Margin below threshold",
                    "sku": p.sku,
                    "cost": cost,
                    "retail_price": retail,
                    "margin_percent": round2(margin * 100.0),
                    "threshold_percent": threshold * 100.0,
                }),
            });
        }
    }

    findings
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
