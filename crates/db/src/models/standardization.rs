//! Standardization configuration models: vendor schema mappings, attribute
//! normalizations, and brand compliance rules. All three are read-only
//! inputs to the import pipeline at runtime.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vendora_core::compliance::{ComplianceRule, RuleKind};
use vendora_core::mapping::ColumnMapping;
use vendora_core::normalize::NormalizationEntry;
use vendora_core::transform::TransformRule;
use vendora_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Vendor schema mapping
// ---------------------------------------------------------------------------

/// A row from the `vendor_schema_mappings` table. Unique per
/// (vendor_name, vendor_column).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendorSchemaMapping {
    pub id: DbId,
    pub vendor_name: String,
    pub vendor_column: String,
    pub erp_column: String,
    pub transform_rule: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VendorSchemaMapping {
    /// Convert to the core mapping config, parsing the stored transform.
    pub fn to_column_mapping(&self) -> ColumnMapping {
        ColumnMapping {
            vendor_column: self.vendor_column.clone(),
            erp_column: self.erp_column.clone(),
            transform: TransformRule::from_config(self.transform_rule.as_ref()),
        }
    }
}

/// DTO for inserting a new vendor schema mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorSchemaMapping {
    pub vendor_name: String,
    pub vendor_column: String,
    pub erp_column: String,
    pub transform_rule: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Attribute normalization
// ---------------------------------------------------------------------------

/// A row from the `attribute_normalizations` table. Unique per
/// (attribute_type, raw_value); lookups compare raw_value
/// case-insensitively.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttributeNormalization {
    pub id: DbId,
    pub attribute_type: String,
    pub raw_value: String,
    pub normalized_value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AttributeNormalization {
    pub fn to_entry(&self) -> NormalizationEntry {
        NormalizationEntry {
            attribute_type: self.attribute_type.clone(),
            raw_value: self.raw_value.clone(),
            normalized_value: self.normalized_value.clone(),
        }
    }
}

/// DTO for inserting a new attribute normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttributeNormalization {
    pub attribute_type: String,
    pub raw_value: String,
    pub normalized_value: String,
}

// ---------------------------------------------------------------------------
// Brand compliance rule
// ---------------------------------------------------------------------------

/// A row from the `brand_compliance_rules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandComplianceRule {
    pub id: DbId,
    pub brand: String,
    pub rule_type: String,
    pub rule_config: serde_json::Value,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BrandComplianceRule {
    /// Convert to the core rule representation with a typed kind.
    pub fn to_compliance_rule(&self) -> ComplianceRule {
        ComplianceRule {
            brand: self.brand.clone(),
            kind: RuleKind::from_parts(&self.rule_type, &self.rule_config),
            is_active: self.is_active,
        }
    }
}

/// DTO for inserting a new brand compliance rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrandComplianceRule {
    pub brand: String,
    pub rule_type: String,
    pub rule_config: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}
