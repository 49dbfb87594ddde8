//! Trait definitions for the wacloud media client.
//!
//! This crate provides the [`Transport`] seam between media operations and the
//! HTTP stack, plus the value types that cross it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::Transport;
pub use types::{ApiRequest, ByteStream, Method, RawResponse, StreamResponse};
