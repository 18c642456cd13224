//! Route definitions for vendor import and standardization configuration.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{standardization_config, vendor_import};
use crate::state::AppState;

/// Routes mounted at `/vendor-import`.
///
/// ```text
/// GET  /mappings   -> list_mappings (mappings + distinct vendors)
/// POST /mappings   -> create_mapping
/// POST /preview    -> preview   (per-row classification)
/// POST /import     -> import    (aggregate summary)
/// ```
pub fn vendor_import_router() -> Router<AppState> {
    Router::new()
        .route(
            "/mappings",
            get(vendor_import::list_mappings).post(standardization_config::create_mapping),
        )
        .route("/preview", post(vendor_import::preview))
        .route("/import", post(vendor_import::import))
}

/// Setup-time configuration routes mounted directly under `/api/v1`.
///
/// ```text
/// GET/POST /normalizations
/// GET/POST /compliance-rules
/// ```
pub fn config_router() -> Router<AppState> {
    Router::new()
        .route(
            "/normalizations",
            get(standardization_config::list_normalizations)
                .post(standardization_config::create_normalization),
        )
        .route(
            "/compliance-rules",
            get(standardization_config::list_rules).post(standardization_config::create_rule),
        )
}
