//! Media operations for the WhatsApp Cloud API.
//!
//! This crate wires the [`Transport`](wacloud_interface::Transport) seam to
//! `reqwest` and implements the media endpoints on top of it:
//!
//! - **Fetch metadata** - `GET /<media-id>`, decoded into
//!   [`MediaMetadata`](wacloud_core::MediaMetadata)
//! - **Download** - authenticated streaming GET of the media URL
//! - **Delete** - `DELETE /<media-id>`
//!
//! # Example
//!
//! ```no_run
//! use wacloud_core::ConnectionSettings;
//! use wacloud_media::{MediaClient, collect_bytes};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MediaClient::from_settings(ConnectionSettings::new("token"))?;
//! let metadata = client.fetch_metadata("1234567890").await?;
//! let bytes = collect_bytes(client.download(metadata.url()).await?).await?;
//! assert!(metadata.verify_content(&bytes));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod decode;
mod stream;
mod transport;

pub use client::{MediaClient, SUCCESS_STATUS};
pub use decode::{api_error, decode_error};
pub use stream::{collect_bytes, write_to};
pub use transport::ReqwestTransport;
