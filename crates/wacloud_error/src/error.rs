//! Top-level error wrapper types.

use crate::{
    ApiError, BuilderError, ConfigError, JsonError, RetryableError, StatusError, TransportError,
};

/// Every failure the wacloud crates can report.
///
/// # Examples
///
/// ```
/// use wacloud_error::{WacloudError, ConfigError};
///
/// let config_err = ConfigError::new("Missing access token");
/// let err: WacloudError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WacloudErrorKind {
    /// Network or request-construction failure
    #[from(TransportError)]
    Transport(TransportError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Non-success response with a decoded error envelope
    #[from(ApiError)]
    Api(ApiError),
    /// Unexpected status on an operation that does not decode bodies
    #[from(StatusError)]
    Status(StatusError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// wacloud error with kind discrimination.
///
/// Renders the inner error unchanged, so a remote rejection reads exactly as
/// the Graph API worded it.
///
/// # Examples
///
/// ```
/// use wacloud_core::{ErrorDetail, ErrorEnvelope};
/// use wacloud_error::{ApiError, WacloudError, WacloudResult};
///
/// fn might_fail() -> WacloudResult<()> {
///     Err(ApiError::new(404, ErrorEnvelope::new(ErrorDetail::new("Not found", 100))))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.to_string(), "Not found");
/// assert_eq!(err.status(), Some(404));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{}", _0)]
pub struct WacloudError(Box<WacloudErrorKind>);

impl WacloudError {
    /// Create a new error from a kind.
    pub fn new(kind: WacloudErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WacloudErrorKind {
        &self.0
    }

    /// HTTP status code, for remote rejections and status failures.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            WacloudErrorKind::Api(e) => Some(e.status),
            WacloudErrorKind::Status(e) => Some(e.status),
            _ => None,
        }
    }

    /// The decoded error envelope, for remote rejections.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.kind() {
            WacloudErrorKind::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl RetryableError for WacloudError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            WacloudErrorKind::Transport(e) => e.is_retryable(),
            WacloudErrorKind::Api(e) => e.is_retryable(),
            WacloudErrorKind::Status(e) => e.is_retryable(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to WacloudErrorKind
impl<T> From<T> for WacloudError
where
    T: Into<WacloudErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for wacloud operations.
///
/// # Examples
///
/// ```
/// use wacloud_error::{JsonError, WacloudResult};
///
/// fn parse_data() -> WacloudResult<String> {
///     Err(JsonError::new("trailing characters"))?
/// }
/// ```
pub type WacloudResult<T> = std::result::Result<T, WacloudError>;
