//! Typed failures surfaced by the repository layer.

use microgram_core::error::CoreError;

/// Error type returned by repository operations.
///
/// Domain failures (validation, missing rows, unimplemented operations)
/// travel as [`CoreError`]; everything the driver reports, such as
/// constraint violations and connectivity loss, stays a [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
