//! Repository for the data audit log.

use sqlx::PgPool;
use vendora_core::types::DbId;

use crate::models::audit::{
    AuditLogPage, AuditLogQuery, AuditSummary, AuditTypeCounts, CreateDataAuditLog, DataAuditLog,
    SeverityCounts,
};

/// Column list for `data_audit_logs` queries.
const LOG_COLUMNS: &str = "\
    id, audit_type, severity, entity_type, entity_id, details, \
    resolved_at, created_at, updated_at";

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 500;

/// Provides append and query operations for audit log entries.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append one finding to the log.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDataAuditLog,
    ) -> Result<DataAuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_audit_logs \
                (audit_type, severity, entity_type, entity_id, details) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {LOG_COLUMNS}"
        );
        sqlx::query_as::<_, DataAuditLog>(&query)
            .bind(&input.audit_type)
            .bind(&input.severity)
            .bind(&input.entity_type)
            .bind(input.entity_id)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// List entries newest first, with a filtered total for pagination.
    /// Unless the query says otherwise only unresolved entries are shown.
    pub async fn list(pool: &PgPool, params: &AuditLogQuery) -> Result<AuditLogPage, sqlx::Error> {
        let resolved = params.resolved.as_deref().unwrap_or("unresolved");
        let resolved_clause = match resolved {
            "resolved" => "resolved_at IS NOT NULL",
            "all" => "TRUE",
            _ => "resolved_at IS NULL",
        };
        let filter = format!(
            "{resolved_clause} \
             AND ($1::text IS NULL OR severity = $1) \
             AND ($2::text IS NULL OR audit_type = $2)"
        );

        let limit = params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = params.offset.unwrap_or(0).max(0);

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM data_audit_logs WHERE {filter}"
        ))
        .bind(&params.severity)
        .bind(&params.audit_type)
        .fetch_one(pool)
        .await?;

        let items = sqlx::query_as::<_, DataAuditLog>(&format!(
            "SELECT {LOG_COLUMNS} FROM data_audit_logs WHERE {filter} \
             ORDER BY created_at DESC, id DESC LIMIT $3 OFFSET $4"
        ))
        .bind(&params.severity)
        .bind(&params.audit_type)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(AuditLogPage { items, total })
    }

    /// Dashboard counts over the unresolved backlog.
    pub async fn summary(pool: &PgPool) -> Result<AuditSummary, sqlx::Error> {
        let row: (i64, i64, i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE severity = 'critical'), \
                    COUNT(*) FILTER (WHERE severity = 'warning'), \
                    COUNT(*) FILTER (WHERE severity = 'info'), \
                    COUNT(*) FILTER (WHERE audit_type = 'price_discrepancy'), \
                    COUNT(*) FILTER (WHERE audit_type = 'broken_asset'), \
                    COUNT(*) FILTER (WHERE audit_type = 'orphaned_product') \
             FROM data_audit_logs WHERE resolved_at IS NULL",
        )
        .fetch_one(pool)
        .await?;

        Ok(AuditSummary {
            total_unresolved: row.0,
            by_severity: SeverityCounts {
                critical: row.1,
                warning: row.2,
                info: row.3,
            },
            by_type: AuditTypeCounts {
                price_discrepancy: row.4,
                broken_asset: row.5,
                orphaned_product: row.6,
            },
        })
    }

    /// Mark an entry resolved. Idempotent: an already-resolved entry
    /// keeps its original timestamp. Returns None for unknown IDs.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<Option<DataAuditLog>, sqlx::Error> {
        let query = format!(
            "UPDATE data_audit_logs \
             SET resolved_at = COALESCE(resolved_at, NOW()), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {LOG_COLUMNS}"
        );
        sqlx::query_as::<_, DataAuditLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
