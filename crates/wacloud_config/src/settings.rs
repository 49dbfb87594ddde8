//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from wacloud.toml)
//! - User config in home directory (~/.config/wacloud/wacloud.toml)
//! - User config in current directory (./wacloud.toml)
//! - Environment variables (`WHATSAPP_TOKEN`, `WHATSAPP_BASE_URI`,
//!   `WHATSAPP_API_VERSION`)

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};
use wacloud_core::{ConnectionSettings, DEFAULT_API_VERSION, DEFAULT_BASE_URI};
use wacloud_error::{BuilderError, ConfigError, WacloudResult};

/// Environment variable holding the access token.
pub const ENV_TOKEN: &str = "WHATSAPP_TOKEN";

/// Environment variable overriding the base URI.
pub const ENV_BASE_URI: &str = "WHATSAPP_BASE_URI";

/// Environment variable overriding the API version.
pub const ENV_API_VERSION: &str = "WHATSAPP_API_VERSION";

fn default_base_uri() -> String {
    DEFAULT_BASE_URI.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// Top-level wacloud configuration.
///
/// # Example
///
/// ```toml
/// base_uri = "https://graph.facebook.com"
/// api_version = "v17.0"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WacloudConfig {
    /// Scheme and host of the Graph API
    #[serde(default = "default_base_uri")]
    pub base_uri: String,

    /// Version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Access token (prefer the environment over files)
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Per-request timeout for the HTTP transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for WacloudConfig {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
            api_version: default_api_version(),
            token: None,
            timeout_secs: None,
        }
    }
}

impl WacloudConfig {
    /// Load configuration from a specific file path.
    ///
    /// Fields missing from the file take their defaults. Environment
    /// variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> WacloudResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: environment > current dir > home dir
    /// > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wacloud_config::WacloudConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let settings = WacloudConfig::load()?.settings()?;
    /// println!("Talking to {}", settings.api_root());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> WacloudResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../wacloud.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/wacloud/wacloud.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("wacloud").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        Ok(config.with_env_from(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Empty values are ignored.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = value(ENV_TOKEN) {
            debug!("Access token taken from environment");
            self.token = Some(token);
        }
        if let Some(base_uri) = value(ENV_BASE_URI) {
            debug!(base_uri = %base_uri, "Base URI taken from environment");
            self.base_uri = base_uri;
        }
        if let Some(api_version) = value(ENV_API_VERSION) {
            debug!(api_version = %api_version, "API version taken from environment");
            self.api_version = api_version;
        }
        self
    }

    /// Configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate and convert into connection settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the token is missing or empty, the base URI
    /// is not an http(s) URI, or the API version is empty.
    pub fn settings(&self) -> WacloudResult<ConnectionSettings> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!("Access token not set (export {})", ENV_TOKEN))
            })?;

        if !(self.base_uri.starts_with("https://") || self.base_uri.starts_with("http://")) {
            return Err(ConfigError::new(format!(
                "Base URI must start with http:// or https://, got '{}'",
                self.base_uri
            ))
            .into());
        }

        if self.api_version.trim_matches('/').is_empty() {
            return Err(ConfigError::new("API version must not be empty").into());
        }

        let settings = ConnectionSettings::builder()
            .token(token)
            .base_uri(self.base_uri.clone())
            .api_version(self.api_version.clone())
            .build()
            .map_err(BuilderError::from)?;
        Ok(settings)
    }
}
