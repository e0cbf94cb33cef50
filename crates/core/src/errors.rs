use thiserror::Error;

/// Unified error type for the entire trade-discipline-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input Validation ────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Account data is not available")]
    AccountUnavailable,

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    // ── External Collaborators ──────────────────────────────────────
    #[error("Collaborator error ({name}): {message}")]
    Source {
        name: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
