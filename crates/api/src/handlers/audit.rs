//! Handlers for the `/audits` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use vendora_core::error::CoreError;
use vendora_core::types::DbId;
use vendora_db::models::audit::{AuditLogQuery, AuditSummary, DataAuditLog};
use vendora_db::repositories::AuditLogRepo;

use crate::engine::audit as audit_engine;
use crate::engine::audit::AuditRunResult;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing payload: the filtered page plus the unresolved-backlog summary
/// for the dashboard header.
#[derive(Debug, Serialize)]
pub struct AuditListPayload {
    pub items: Vec<DataAuditLog>,
    pub total: i64,
    pub summary: AuditSummary,
}

/// GET /api/v1/audits
///
/// Filtered, paginated audit log; unresolved entries by default.
pub async fn list_audits(
    State(state): State<AppState>,
    Query(params): Query<AuditLogQuery>,
) -> AppResult<Json<DataResponse<AuditListPayload>>> {
    let page = AuditLogRepo::list(&state.pool, &params).await?;
    let summary = AuditLogRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse {
        data: AuditListPayload {
            items: page.items,
            total: page.total,
            summary,
        },
    }))
}

/// POST /api/v1/audits/{id}/resolve
///
/// One-way transition; resolving an already-resolved entry is a no-op.
pub async fn resolve_audit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DataAuditLog>>> {
    let entry = AuditLogRepo::resolve(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DataAuditLog",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/v1/audits/run/{type}
///
/// Run one sweep (or `all`) and report how many findings were recorded.
pub async fn run_audit(
    State(state): State<AppState>,
    Path(audit_type): Path<String>,
) -> AppResult<Json<DataResponse<AuditRunResult>>> {
    let result = audit_engine::run_by_name(&state.pool, &audit_type)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown audit type '{audit_type}', expected one of: {}",
                audit_engine::RUN_TYPES.join(", ")
            ))
        })?;
    Ok(Json(DataResponse { data: result }))
}
