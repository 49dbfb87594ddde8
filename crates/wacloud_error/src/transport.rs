//! Transport-level error types.

/// Failures below the HTTP status line: the request never produced a status,
/// or the response body could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// Request could not be built or sent
    #[display("Request failed: {}", _0)]
    Request(String),
    /// DNS, TLS or connection failure
    #[display("Connection failed: {}", _0)]
    Connect(String),
    /// Deadline configured on the transport elapsed
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// Response body could not be read
    #[display("Failed to read response body: {}", _0)]
    Body(String),
    /// Downloaded bytes do not match the advertised digest
    #[display("Content failed integrity check: {}", _0)]
    Integrity(String),
    /// Downloaded bytes could not be written to their destination
    #[display("Failed to write media: {}", _0)]
    Write(String),
    /// Endpoint or download URL is not a valid URL
    #[display("Invalid URL '{}': {}", url, reason)]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },
}

/// Transport error with source location.
///
/// # Examples
///
/// ```
/// use wacloud_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Timeout("30s elapsed".into()));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of failure
    pub kind: TransportErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
