//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! The data-access layer has no HTTP surface of its own; this mapping is
//! what the handler layer in front of it uses to turn failures into
//! responses.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Presign` -> 502 (Bad Gateway)
/// - everything else -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todos_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Todo",
///     id: "u1/t1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::Presign(_) => 502,
        RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
