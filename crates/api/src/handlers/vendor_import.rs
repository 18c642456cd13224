//! Handlers for the `/vendor-import` resource.
//!
//! The upload collaborator parses vendor files into JSON rows; these
//! endpoints consume the parsed rows. Preview classifies without
//! summarizing, import produces the aggregate classification summary.
//! Neither writes catalog records.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vendora_core::import::{
    classify_row, classify_rows, ImportSummary, RowClassification, StandardizationContext,
};
use vendora_db::models::standardization::VendorSchemaMapping;
use vendora_db::repositories::{
    AttributeNormalizationRepo, ComplianceRuleRepo, VendorSchemaMappingRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for preview and import: vendor name plus parsed rows.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub vendor: String,
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
}

/// Mapping listing payload: full config plus the distinct vendor list.
#[derive(Debug, Serialize)]
pub struct MappingsPayload {
    pub mappings: Vec<VendorSchemaMapping>,
    pub vendors: Vec<String>,
}

/// Preview payload: one classification per submitted row.
#[derive(Debug, Serialize)]
pub struct PreviewPayload {
    pub rows: Vec<RowClassification>,
}

/// GET /api/v1/vendor-import/mappings
///
/// All configured mappings plus the distinct vendor list, for the
/// import form.
pub async fn list_mappings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<MappingsPayload>>> {
    let mappings = VendorSchemaMappingRepo::list_all(&state.pool).await?;
    let vendors = VendorSchemaMappingRepo::vendors(&state.pool).await?;
    Ok(Json(DataResponse {
        data: MappingsPayload { mappings, vendors },
    }))
}

/// POST /api/v1/vendor-import/preview
///
/// Classify each row and return original, mapped, and violations side by
/// side so the operator can inspect the standardization before importing.
pub async fn preview(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<Json<DataResponse<PreviewPayload>>> {
    let ctx = load_context(&state, &input.vendor).await?;
    let rows: Vec<_> = input
        .rows
        .iter()
        .map(|row| classify_row(&ctx, &input.vendor, row))
        .collect();
    Ok(Json(DataResponse {
        data: PreviewPayload { rows },
    }))
}

/// POST /api/v1/vendor-import/import
///
/// Classify the batch and return the aggregate summary. Rows with
/// violations are skipped and reported under their 1-based index.
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<Json<DataResponse<ImportSummary>>> {
    let ctx = load_context(&state, &input.vendor).await?;
    let summary = classify_rows(&ctx, &input.vendor, &input.rows);
    tracing::info!(
        vendor = %input.vendor,
        imported = summary.imported,
        skipped = summary.skipped,
        "Vendor import classified"
    );
    Ok(Json(DataResponse { data: summary }))
}

/// Load the standardization config snapshot for one vendor.
async fn load_context(state: &AppState, vendor: &str) -> AppResult<StandardizationContext> {
    let mappings = VendorSchemaMappingRepo::for_vendor(&state.pool, vendor).await?;
    let normalizations = AttributeNormalizationRepo::list_all(&state.pool).await?;
    let rules = ComplianceRuleRepo::list_all(&state.pool).await?;

    Ok(StandardizationContext {
        mappings: mappings.iter().map(|m| m.to_column_mapping()).collect(),
        normalizations: normalizations.iter().map(|n| n.to_entry()).collect(),
        rules: rules.iter().map(|r| r.to_compliance_rule()).collect(),
    })
}
