//! Media operations.

use crate::{ReqwestTransport, api_error};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use wacloud_core::{
    ConnectionSettings, InlinePayload, MediaMetadata, MediaReference, MediaSource,
};
use wacloud_error::{
    JsonError, StatusError, StatusOperation, TransportError, TransportErrorKind, WacloudResult,
};
use wacloud_interface::{ApiRequest, ByteStream, Transport};

/// The only status treated as success; every other status is a failure.
pub const SUCCESS_STATUS: u16 = 200;

/// Client for the media endpoints.
///
/// Generic over the [`Transport`] so tests can script responses; production
/// code uses [`ReqwestTransport`].
///
/// # Examples
///
/// ```no_run
/// use wacloud_core::ConnectionSettings;
/// use wacloud_media::MediaClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MediaClient::from_settings(ConnectionSettings::new("token"))?;
/// let deleted = client.delete_by_id("1234567890").await?;
/// assert!(deleted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MediaClient<T> {
    transport: T,
}

impl MediaClient<ReqwestTransport> {
    /// Client over a default [`ReqwestTransport`].
    pub fn from_settings(settings: ConnectionSettings) -> WacloudResult<Self> {
        Ok(Self::new(ReqwestTransport::new(settings)?))
    }

    /// Client over a [`ReqwestTransport`] with a request timeout.
    pub fn with_timeout(settings: ConnectionSettings, timeout: Duration) -> WacloudResult<Self> {
        Ok(Self::new(ReqwestTransport::with_timeout(settings, timeout)?))
    }
}

impl<T: Transport> MediaClient<T> {
    /// Client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch metadata for a media identifier.
    ///
    /// # Errors
    ///
    /// - `ApiError` carrying the decoded envelope on any status other than 200
    /// - `JsonError` if a 200 body is not valid metadata
    /// - `TransportError` if the id is empty or a dot segment, or no response
    ///   was received
    #[instrument(skip(self))]
    pub async fn fetch_metadata(&self, media_id: &str) -> WacloudResult<MediaMetadata> {
        let request = ApiRequest::get(media_endpoint(media_id)?);
        let response = self.transport.send(&request).await?;

        let status = *response.status();
        if status != SUCCESS_STATUS {
            warn!(status, "Metadata request rejected");
            return Err(api_error(status, response.body()).into());
        }

        let metadata: MediaMetadata = serde_json::from_slice(response.body())
            .map_err(|e| JsonError::new(format!("Failed to parse media metadata: {}", e)))?;
        debug!(mime_type = %metadata.mime_type(), file_size = metadata.file_size(), "Fetched media metadata");
        Ok(metadata)
    }

    /// Fetch metadata on behalf of a business phone account.
    ///
    /// The account id only scopes the tracing span; the request is the same as
    /// [`fetch_metadata`](Self::fetch_metadata).
    #[instrument(skip(self, media_id))]
    pub async fn fetch_metadata_for_account(
        &self,
        phone_account_id: &str,
        media_id: &str,
    ) -> WacloudResult<MediaMetadata> {
        self.fetch_metadata(media_id).await
    }

    /// Open the content behind a media URL.
    ///
    /// On a non-200 status the body is dropped before returning, so the
    /// connection is released.
    ///
    /// # Errors
    ///
    /// - `StatusError` ("failed to download media: HTTP <code>") on a non-200 status
    /// - `TransportError` if no response was received
    #[instrument(skip(self, url))]
    pub async fn download(&self, url: &str) -> WacloudResult<ByteStream> {
        let response = self.transport.stream(url).await?;
        let status = response.status();
        if status != SUCCESS_STATUS {
            warn!(status, "Download rejected");
            drop(response);
            return Err(StatusError::new(StatusOperation::Download, status).into());
        }
        Ok(response.into_body())
    }

    /// Delete media by identifier.
    ///
    /// Error bodies are not decoded; the status is the only signal.
    ///
    /// # Errors
    ///
    /// - `StatusError` ("failed to delete media: HTTP <code>") on a non-200 status
    /// - `TransportError` if the id is empty or a dot segment, or no response
    ///   was received
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, media_id: &str) -> WacloudResult<bool> {
        let request = ApiRequest::delete(media_endpoint(media_id)?);
        let response = self.transport.send(&request).await?;

        let status = *response.status();
        if status != SUCCESS_STATUS {
            warn!(status, "Delete rejected");
            return Err(StatusError::new(StatusOperation::Delete, status).into());
        }
        debug!("Media deleted");
        Ok(true)
    }

    /// Turn any reference into a link reference of the same kind.
    ///
    /// Identifiers (bare or inline) are looked up through the metadata
    /// endpoint; links and inline content are relabeled without I/O.
    #[instrument(skip(self, reference), fields(kind = %reference.kind(), file = %reference.file()))]
    pub async fn resolve_link(&self, reference: &MediaReference) -> WacloudResult<MediaReference> {
        match reference.source() {
            MediaSource::Identifier(id) | MediaSource::Inline(InlinePayload::Identifier(id)) => {
                let metadata = self.fetch_metadata(id).await?;
                Ok(MediaReference::link(*reference.kind(), metadata.url().clone()))
            }
            MediaSource::Link(_) => Ok(reference.clone()),
            MediaSource::Inline(InlinePayload::Content(link)) => {
                Ok(MediaReference::link(*reference.kind(), link.clone()))
            }
        }
    }

    /// Fetch metadata, then open its URL.
    #[instrument(skip(self))]
    pub async fn download_media(&self, media_id: &str) -> WacloudResult<(MediaMetadata, ByteStream)> {
        let metadata = self.fetch_metadata(media_id).await?;
        let stream = self.download(metadata.url()).await?;
        Ok((metadata, stream))
    }
}

/// `/<media-id>`, with the id percent-encoded as exactly one path segment.
fn media_endpoint(media_id: &str) -> WacloudResult<String> {
    let invalid = |reason: &str| {
        TransportError::new(TransportErrorKind::InvalidUrl {
            url: media_id.to_string(),
            reason: reason.to_string(),
        })
    };

    // Dot segments would be dropped or climb out of the version segment.
    if matches!(media_id, "" | "." | "..") {
        return Err(invalid("media id must be a non-empty path segment").into());
    }

    let mut url = Url::parse("http://localhost/").map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot encode path segment"))?
        .clear()
        // `push` leaves `%` alone, and `%2e%2e` parses as a dot segment.
        .push(&media_id.replace('%', "%25"));
    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_endpoint_plain_id() {
        assert_eq!(media_endpoint("1234567890").unwrap(), "/1234567890");
    }

    #[test]
    fn test_media_endpoint_encodes_reserved_characters() {
        assert_eq!(media_endpoint("../me").unwrap(), "/..%2Fme");
        assert_eq!(media_endpoint("a?b#c").unwrap(), "/a%3Fb%23c");
        assert_eq!(media_endpoint("a b").unwrap(), "/a%20b");
        assert_eq!(media_endpoint("%2e%2e").unwrap(), "/%252e%252e");
    }

    #[test]
    fn test_media_endpoint_rejects_dot_segments() {
        for id in ["", ".", ".."] {
            let err = media_endpoint(id).unwrap_err();
            assert!(err.to_string().contains("Invalid URL"), "{}", err);
        }
    }
}
