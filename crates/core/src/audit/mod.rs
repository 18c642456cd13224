//! Data-quality audit sweeps.
//!
//! Each sweep is a pure detector over an in-memory catalog snapshot,
//! returning the findings to persist. Sweeps are stateless and never
//! deduplicate against previously recorded findings: re-running a sweep
//! over unchanged data produces the same findings again.

pub mod asset_health;
pub mod categorization;
pub mod price;

pub use asset_health::scan_asset_health;
pub use categorization::scan_categorization;
pub use price::scan_price_discrepancies;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Default margin threshold for the price discrepancy sweep.
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 0.15;

/// Default staleness threshold (days) for the asset health sweep.
pub const DEFAULT_STALE_DAYS: i64 = 30;

/// Audit type discriminators persisted on each finding.
pub mod audit_types {
    pub const PRICE_DISCREPANCY: &str = "price_discrepancy";
    pub const BROKEN_ASSET: &str = "broken_asset";
    pub const ORPHANED_PRODUCT: &str = "orphaned_product";
}

/// Entity type names referenced by findings.
pub mod entity_types {
    pub const PRODUCT: &str = "Product";
    pub const PRODUCT_ASSET: &str = "ProductAsset";
}

/// Finding severity, ranked info < warning < critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// A detected data-quality anomaly, ready to be written to the audit log.
#[derive(Debug, Clone, Serialize)]
pub struct AuditFinding {
    pub audit_type: &'static str,
    pub severity: Severity,
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub details: serde_json::Value,
}

/// Product fields consumed by the pricing and categorization sweeps.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub id: DbId,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub cost: Option<f64>,
    pub msrp: Option<f64>,
    pub retail_price: Option<f64>,
}

/// Product asset fields consumed by the asset health sweep.
#[derive(Debug, Clone)]
pub struct AssetSnapshot {
    pub id: DbId,
    pub product_id: DbId,
    pub asset_type: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub last_checked_at: Option<Timestamp>,
}
