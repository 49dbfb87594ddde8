//! Configuration loading for the wacloud media client.
//!
//! The media operations only ever see an immutable
//! [`ConnectionSettings`](wacloud_core::ConnectionSettings). This crate builds
//! one from layered TOML files and environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{ENV_API_VERSION, ENV_BASE_URI, ENV_TOKEN, WacloudConfig};
