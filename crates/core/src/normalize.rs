//! Case-insensitive attribute value normalization.

/// Attribute columns normalized automatically during import.
pub const KNOWN_ATTRIBUTE_COLUMNS: &[&str] = &["material", "color", "unit"];

/// One entry of the normalization lookup table, unique per
/// (attribute_type, raw_value) compared case-insensitively.
#[derive(Debug, Clone)]
pub struct NormalizationEntry {
    pub attribute_type: String,
    pub raw_value: String,
    pub normalized_value: String,
}

/// Canonicalize an attribute value.
///
/// Exact case-insensitive match within the `attribute_type` partition of the
/// lookup table; a miss returns the raw value verbatim. Total, never fails.
pub fn normalize_attribute(entries: &[NormalizationEntry], attribute_type: &str, raw: &str) -> String {
    entries
        .iter()
        .find(|e| e.attribute_type == attribute_type && e.raw_value.eq_ignore_ascii_case(raw))
        .map(|e| e.normalized_value.clone())
        .unwrap_or_else(|| raw.to_string())
}
