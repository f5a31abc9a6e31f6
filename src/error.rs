/// Error types for meeting-actions
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
/// The extraction pipeline itself is total over its input and never fails; only
/// session operations produce errors.
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert AppError to a string for callers that surface plain messages
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}
