//! Audit log entity models and DTOs.
//!
//! Audit logs are append-only: the core only ever creates them, and the
//! single permitted mutation is the one-way unresolved -> resolved
//! transition performed by the dashboard.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vendora_core::audit::AuditFinding;
use vendora_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `data_audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DataAuditLog {
    pub id: DbId,
    pub audit_type: String,
    pub severity: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for inserting a new audit log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDataAuditLog {
    pub audit_type: String,
    pub severity: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
}

impl From<AuditFinding> for CreateDataAuditLog {
    fn from(finding: AuditFinding) -> Self {
        Self {
            audit_type: finding.audit_type.to_string(),
            severity: finding.severity.as_str().to_string(),
            entity_type: Some(finding.entity_type.to_string()),
            entity_id: Some(finding.entity_id),
            details: Some(finding.details),
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter parameters for listing audit logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub severity: Option<String>,
    pub audit_type: Option<String>,
    /// "resolved", "unresolved", or "all". Listing defaults to unresolved.
    pub resolved: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated response for audit log queries.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub items: Vec<DataAuditLog>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Unresolved-findings counts grouped by severity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeverityCounts {
    pub critical: i64,
    pub warning: i64,
    pub info: i64,
}

/// Unresolved-findings counts grouped by audit type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditTypeCounts {
    pub price_discrepancy: i64,
    pub broken_asset: i64,
    pub orphaned_product: i64,
}

/// Dashboard summary of unresolved findings.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub total_unresolved: i64,
    pub by_severity: SeverityCounts,
    pub by_type: AuditTypeCounts,
}
