//! Retry classification.
//!
//! The client never retries on its own. These hooks let callers decide.

use crate::{ApiError, StatusError, TransportError, TransportErrorKind};

/// Trait for errors that can tell a caller whether retrying makes sense.
///
/// # Examples
///
/// ```
/// use wacloud_error::{RetryableError, StatusError, StatusOperation};
///
/// assert!(StatusError::new(StatusOperation::Download, 503).is_retryable());
/// assert!(!StatusError::new(StatusOperation::Delete, 404).is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error is transient.
    ///
    /// Throttling (429), timeouts (408) and server errors (5xx) are transient.
    /// Client errors such as 400, 401 or 404 are permanent.
    fn is_retryable(&self) -> bool;
}

fn retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

impl RetryableError for TransportError {
    fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            TransportErrorKind::Connect(_) | TransportErrorKind::Timeout(_)
        )
    }
}

impl RetryableError for ApiError {
    fn is_retryable(&self) -> bool {
        retryable_status(self.status)
    }
}

impl RetryableError for StatusError {
    fn is_retryable(&self) -> bool {
        retryable_status(self.status)
    }
}
