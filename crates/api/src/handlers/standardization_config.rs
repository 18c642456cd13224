//! Handlers for setup-time standardization configuration.
//!
//! Duplicate configuration (same vendor column or same raw value) is
//! rejected with 409 via the unique constraints on the config tables.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use vendora_db::models::standardization::{
    AttributeNormalization, BrandComplianceRule, CreateAttributeNormalization,
    CreateBrandComplianceRule, CreateVendorSchemaMapping, VendorSchemaMapping,
};
use vendora_db::repositories::{
    AttributeNormalizationRepo, ComplianceRuleRepo, VendorSchemaMappingRepo,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/vendor-import/mappings
pub async fn create_mapping(
    State(state): State<AppState>,
    Json(input): Json<CreateVendorSchemaMapping>,
) -> AppResult<(StatusCode, Json<DataResponse<VendorSchemaMapping>>)> {
    let mapping = VendorSchemaMappingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: mapping })))
}

/// GET /api/v1/normalizations
pub async fn list_normalizations(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AttributeNormalization>>>> {
    let entries = AttributeNormalizationRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/normalizations
pub async fn create_normalization(
    State(state): State<AppState>,
    Json(input): Json<CreateAttributeNormalization>,
) -> AppResult<(StatusCode, Json<DataResponse<AttributeNormalization>>)> {
    let entry = AttributeNormalizationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/compliance-rules
pub async fn list_rules(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BrandComplianceRule>>>> {
    let rules = ComplianceRuleRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: rules }))
}

/// POST /api/v1/compliance-rules
pub async fn create_rule(
    State(state): State<AppState>,
    Json(input): Json<CreateBrandComplianceRule>,
) -> AppResult<(StatusCode, Json<DataResponse<BrandComplianceRule>>)> {
    let rule = ComplianceRuleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}
