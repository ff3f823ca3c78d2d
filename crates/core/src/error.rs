/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a validation rule before reaching the database.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No row matched the requested key.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// The operation exists in the API surface but has never been built.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}
