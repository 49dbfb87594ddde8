//! Status-only failures for operations that do not decode error bodies.

/// Operation that received an unexpected status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StatusOperation {
    /// Streaming media download
    #[display("download media")]
    Download,
    /// Media deletion
    #[display("delete media")]
    Delete,
}

/// Unexpected HTTP status with source location.
///
/// # Examples
///
/// ```
/// use wacloud_error::{StatusError, StatusOperation};
///
/// let err = StatusError::new(StatusOperation::Delete, 400);
/// assert!(err.to_string().contains("failed to delete media: HTTP 400"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("failed to {}: HTTP {} at line {} in {}", operation, status, line, file)]
pub struct StatusError {
    /// Operation that was attempted
    pub operation: StatusOperation,
    /// HTTP status code received
    pub status: u16,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StatusError {
    /// Create a new StatusError with automatic location tracking.
    #[track_caller]
    pub fn new(operation: StatusOperation, status: u16) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation,
            status,
            line: location.line(),
            file: location.file(),
        }
    }
}
