//! Route definitions for the `/audits` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audits`.
///
/// ```text
/// GET  /              -> list_audits   (?severity, ?audit_type, ?resolved, ?limit, ?offset)
/// POST /{id}/resolve  -> resolve_audit
/// POST /run/{type}    -> run_audit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audit::list_audits))
        .route("/{id}/resolve", post(audit::resolve_audit))
        .route("/run/{type}", post(audit::run_audit))
}
