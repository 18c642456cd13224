//! Vendor-column to canonical-column mapping.

use serde_json::{Map, Value};

use crate::transform::TransformRule;

/// One vendor column mapped to a canonical (ERP) column, with an optional
/// value transform. Read-only configuration, unique per
/// (vendor_name, vendor_column).
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub vendor_column: String,
    pub erp_column: String,
    pub transform: Option<TransformRule>,
}

/// Map a raw vendor row to canonical columns.
///
/// - A vendor with no mappings gets the row back unchanged (passthrough).
/// - Each mapping whose `vendor_column` exists in the row contributes one
///   canonical column; raw columns without a mapping are dropped.
pub fn map_vendor_row(mappings: &[ColumnMapping], row: &Map<String, Value>) -> Map<String, Value> {
    if mappings.is_empty() {
        return row.clone();
    }

    let mut mapped = Map::new();

    for mapping in mappings {
        let Some(value) = row.get(&mapping.vendor_column) else {
            continue;
        };

        let value = match &mapping.transform {
            Some(rule) => rule.apply(value),
            None => value.clone(),
        };
        mapped.insert(mapping.erp_column.clone(), value);
    }

    mapped
}
