use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Everything a handler can reject before or after touching storage:
/// a referenced row is absent, a request body fails validation, or a
/// uniqueness rule is violated. Storage failures themselves are carried
/// separately as `sqlx::Error` and translated at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
