//! Core data types for the wacloud media client.
//!
//! This crate provides the data model shared by every wacloud crate: media kinds,
//! the polymorphic media reference, server-returned metadata, the error envelope
//! returned by the Graph API, and immutable connection settings.
//!
//! Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod kind;
mod media;
mod metadata;
mod settings;

pub use envelope::{ErrorData, ErrorDetail, ErrorEnvelope};
pub use kind::MediaKind;
pub use media::{InlinePayload, MediaObject, MediaReference, MediaSource};
pub use metadata::{MediaMetadata, MediaMetadataBuilder, MediaMetadataBuilderError};
pub use settings::{
    ConnectionSettings, ConnectionSettingsBuilder, ConnectionSettingsBuilderError,
    DEFAULT_API_VERSION, DEFAULT_BASE_URI,
};
