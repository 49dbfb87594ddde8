//! Error types for the wacloud media client.
//!
//! This crate provides the error types used throughout the wacloud workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Remote rejections are the exception: [`ApiError`] renders exactly the
//! message the Graph API returned, and [`WacloudError`] renders its inner
//! error unchanged.
//!
//! # Examples
//!
//! ```
//! use wacloud_error::{TransportError, TransportErrorKind, WacloudResult};
//!
//! fn fetch_data() -> WacloudResult<String> {
//!     Err(TransportError::new(TransportErrorKind::Connect("connection refused".into())))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod builder;
mod config;
mod error;
mod json;
mod retry;
mod status;
mod transport;

pub use api::ApiError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{WacloudError, WacloudErrorKind, WacloudResult};
pub use json::JsonError;
pub use retry::RetryableError;
pub use status::{StatusError, StatusOperation};
pub use transport::{TransportError, TransportErrorKind};
