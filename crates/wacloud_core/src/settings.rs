//! Immutable connection settings.

use derive_builder::Builder;
use derive_getters::Getters;

/// Default Graph API host.
pub const DEFAULT_BASE_URI: &str = "https://graph.facebook.com";

/// Default Graph API version segment.
pub const DEFAULT_API_VERSION: &str = "v17.0";

/// Token, base URI and API version shared read-only by every request.
///
/// # Examples
///
/// ```
/// use wacloud_core::ConnectionSettings;
///
/// let settings = ConnectionSettings::builder()
///     .token("secret")
///     .api_version("v19.0")
///     .build()
///     .unwrap();
/// assert_eq!(settings.api_root(), "https://graph.facebook.com/v19.0");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Builder, Getters)]
#[builder(setter(into))]
pub struct ConnectionSettings {
    /// Bearer token
    token: String,
    /// Scheme and host of the API
    #[builder(default = "DEFAULT_BASE_URI.to_string()")]
    base_uri: String,
    /// Version path segment
    #[builder(default = "DEFAULT_API_VERSION.to_string()")]
    api_version: String,
}

impl ConnectionSettings {
    /// Settings for the default host and version.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_uri: DEFAULT_BASE_URI.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Creates a new builder for `ConnectionSettings`.
    pub fn builder() -> ConnectionSettingsBuilder {
        ConnectionSettingsBuilder::default()
    }

    /// `base-uri/version`, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_uri.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("token", &"<redacted>")
            .field("base_uri", &self.base_uri)
            .field("api_version", &self.api_version)
            .finish()
    }
}
