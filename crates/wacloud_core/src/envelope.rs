//! Structured error payload returned by the Graph API.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Top-level error envelope: `{"error": {...}}`.
///
/// Every field defaults when absent, so partial envelopes still decode.
///
/// # Examples
///
/// ```
/// use wacloud_core::ErrorEnvelope;
///
/// let envelope: ErrorEnvelope =
///     serde_json::from_str(r#"{"error":{"message":"Not found","code":100}}"#).unwrap();
/// assert_eq!(envelope.message(), "Not found");
/// assert_eq!(*envelope.error().code(), 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ErrorEnvelope {
    /// Error details
    error: ErrorDetail,
}

impl ErrorEnvelope {
    /// Creates an envelope around the given details.
    pub fn new(error: ErrorDetail) -> Self {
        Self { error }
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Whether the envelope carries no information at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Error details inside the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ErrorDetail {
    /// Human-readable message
    message: String,
    /// Error category (e.g. "OAuthException")
    #[serde(rename = "type")]
    error_type: String,
    /// Numeric error code
    code: i32,
    /// Numeric error subcode
    error_subcode: i32,
    /// Trace identifier for support requests
    fbtrace_id: String,
    /// Nested product-specific data
    error_data: ErrorData,
}

impl ErrorDetail {
    /// Creates details with a message and code; remaining fields default.
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
            ..Self::default()
        }
    }
}

/// Product-specific error data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ErrorData {
    /// Messaging product tag
    messaging_product: String,
    /// Free-text details
    details: String,
}
