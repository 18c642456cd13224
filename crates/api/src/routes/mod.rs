pub mod audit;
pub mod health;
pub mod standardization;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vendor-import/mappings       list mappings + vendors (GET), create (POST)
/// /vendor-import/preview        classify rows, per-row detail (POST)
/// /vendor-import/import         classify rows, aggregate summary (POST)
///
/// /normalizations               list (GET), create (POST)
/// /compliance-rules             list (GET), create (POST)
///
/// /audits                       filtered log + summary (GET)
/// /audits/{id}/resolve          one-way resolution (POST)
/// /audits/run/{type}            run a sweep (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vendor-import", standardization::vendor_import_router())
        .merge(standardization::config_router())
        .nest("/audits", audit::router())
}
