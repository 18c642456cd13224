use crate::types::DbId;

/// Domain-level errors surfaced to the API layer.
///
/// The standardization and audit pipelines are total (malformed input
/// degrades, it does not fail), so the only domain error is a lookup miss.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
