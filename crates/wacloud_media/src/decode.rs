//! Best-effort decoding of error bodies.

use tracing::debug;
use wacloud_core::ErrorEnvelope;
use wacloud_error::ApiError;

/// Parse an error envelope, falling back to an empty one.
///
/// The status code is the authoritative failure signal, so a body that is not
/// an envelope never produces a second error.
///
/// # Examples
///
/// ```
/// use wacloud_media::decode_error;
///
/// let envelope = decode_error(br#"{"error":{"message":"Not found","code":100}}"#);
/// assert_eq!(envelope.message(), "Not found");
///
/// assert!(decode_error(b"<html>Bad Gateway</html>").is_empty());
/// ```
pub fn decode_error(body: &[u8]) -> ErrorEnvelope {
    match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!(error = %e, bytes = body.len(), "Error body is not an error envelope");
            ErrorEnvelope::default()
        }
    }
}

/// Decode a non-success response into an [`ApiError`].
pub fn api_error(status: u16, body: &[u8]) -> ApiError {
    ApiError::new(status, decode_error(body))
}
