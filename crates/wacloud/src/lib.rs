//! wacloud - WhatsApp Cloud media client
//!
//! Fetch metadata for, download, and delete media stored by the WhatsApp
//! Cloud (Graph) API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wacloud::{MediaClient, WacloudConfig, collect_bytes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = WacloudConfig::load()?.settings()?;
//!     let client = MediaClient::from_settings(settings)?;
//!
//!     let (metadata, stream) = client.download_media("1234567890").await?;
//!     let bytes = collect_bytes(stream).await?;
//!     println!("{} bytes of {}", bytes.len(), metadata.mime_type());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `wacloud_core` - Media references, metadata, error envelope, settings
//! - `wacloud_error` - Error types
//! - `wacloud_interface` - `Transport` trait and request types
//! - `wacloud_config` - Layered configuration
//! - `wacloud_media` - `reqwest` transport and media operations
//!
//! This crate (`wacloud`) re-exports everything for convenience.

pub use wacloud_config::*;
pub use wacloud_core::*;
pub use wacloud_error::*;
pub use wacloud_interface::*;
pub use wacloud_media::*;

pub mod telemetry;

pub use telemetry::{TracingConfig, init_tracing};
