//! Remote rejection carrying the decoded error envelope.

use wacloud_core::ErrorEnvelope;

/// Non-success response from the Graph API.
///
/// Renders exactly the envelope's message. When the body could not be decoded
/// the envelope is empty and the status code is the only signal.
///
/// # Examples
///
/// ```
/// use wacloud_core::{ErrorDetail, ErrorEnvelope};
/// use wacloud_error::ApiError;
///
/// let err = ApiError::new(404, ErrorEnvelope::new(ErrorDetail::new("Not found", 100)));
/// assert_eq!(err.to_string(), "Not found");
/// assert_eq!(err.status, 404);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{}", envelope.message())]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Decoded error envelope
    pub envelope: ErrorEnvelope,
}

impl ApiError {
    /// Create a new ApiError from a status and decoded envelope.
    pub fn new(status: u16, envelope: ErrorEnvelope) -> Self {
        Self { status, envelope }
    }

    /// Numeric error code from the envelope.
    pub fn code(&self) -> i32 {
        *self.envelope.error().code()
    }

    /// Numeric error subcode from the envelope.
    pub fn subcode(&self) -> i32 {
        *self.envelope.error().error_subcode()
    }

    /// Trace identifier to quote in support requests.
    pub fn trace_id(&self) -> &str {
        self.envelope.error().fbtrace_id()
    }
}
