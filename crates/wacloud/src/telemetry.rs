//! Tracing subscriber setup for applications using wacloud.
//!
//! The library crates only emit events; installing a subscriber is left to
//! the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wacloud_error::{ConfigError, WacloudResult};

/// Subscriber options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// Log at debug instead of info when `RUST_LOG` is unset
    pub verbose: bool,
    /// Emit newline-delimited JSON instead of human-readable lines
    pub json: bool,
}

impl TracingConfig {
    /// Creates a config from the two switches.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// `RUST_LOG` if set, otherwise [`default_directive`](Self::default_directive).
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Install a global subscriber writing to stderr.
///
/// # Errors
///
/// Returns a `ConfigError` if a global subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> WacloudResult<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| ConfigError::new(format!("Failed to initialize tracing: {}", e)))?;
    Ok(())
}
