/// Domain error taxonomy.
///
/// Every variant carries the human-readable message that ends up in the
/// `{"error": ...}` envelope, so lower layers decide the wording and the
/// HTTP layer only decides the status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Absent, soft-deleted, or outside the requested ownership chain.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Logical deletion requested for a row that is already deleted.
    #[error("Already deleted: {0}")]
    AlreadyDeleted(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The client-facing message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            CoreError::NotFound(msg)
            | CoreError::AlreadyDeleted(msg)
            | CoreError::Validation(msg)
            | CoreError::Conflict(msg)
            | CoreError::Unauthorized(msg)
            | CoreError::Forbidden(msg)
            | CoreError::Internal(msg) => msg,
        }
    }
}
