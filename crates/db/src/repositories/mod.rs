//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attribute_normalization_repo;
pub mod audit_log_repo;
pub mod compliance_rule_repo;
pub mod product_asset_repo;
pub mod product_repo;
pub mod vendor_schema_mapping_repo;

pub use attribute_normalization_repo::AttributeNormalizationRepo;
pub use audit_log_repo::AuditLogRepo;
pub use compliance_rule_repo::ComplianceRuleRepo;
pub use product_asset_repo::ProductAssetRepo;
pub use product_repo::ProductRepo;
pub use vendor_schema_mapping_repo::VendorSchemaMappingRepo;
