//! `reqwest`-backed transport.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, error, instrument};
use wacloud_core::ConnectionSettings;
use wacloud_error::{TransportError, TransportErrorKind, WacloudError, WacloudResult};
use wacloud_interface::{ApiRequest, Method, RawResponse, StreamResponse, Transport};

/// HTTP transport authenticating every request with the configured token.
///
/// API requests are resolved against `base-uri/version`; downloads go to the
/// absolute URL they are given, with the same bearer header.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: ConnectionSettings,
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest` client.
    #[instrument(skip(settings), fields(base_uri = %settings.base_uri(), api_version = %settings.api_version()))]
    pub fn new(settings: ConnectionSettings) -> WacloudResult<Self> {
        debug!("Creating reqwest transport");
        let client = Client::builder().build().map_err(transport_error)?;
        Ok(Self::with_client(settings, client))
    }

    /// Create a transport whose requests give up after `timeout`.
    #[instrument(skip(settings), fields(base_uri = %settings.base_uri()))]
    pub fn with_timeout(settings: ConnectionSettings, timeout: Duration) -> WacloudResult<Self> {
        debug!(?timeout, "Creating reqwest transport with timeout");
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self::with_client(settings, client))
    }

    /// Create a transport around an existing client.
    pub fn with_client(settings: ConnectionSettings, client: Client) -> Self {
        Self { settings, client }
    }

    /// The connection settings.
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), endpoint = %request.endpoint()))]
    async fn send(&self, request: &ApiRequest) -> WacloudResult<RawResponse> {
        let url = build_url(&self.settings, request.endpoint(), request.query())?;
        debug!(%url, "Sending API request");

        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, self.settings.bearer())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body() {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            transport_error(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            transport_error(e)
        })?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(RawResponse::new(status, body))
    }

    #[instrument(skip(self, url))]
    async fn stream(&self, url: &str) -> WacloudResult<StreamResponse> {
        let parsed = Url::parse(url).map_err(|e| {
            TransportError::new(TransportErrorKind::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })?;

        let response = self
            .client
            .get(parsed)
            .header(AUTHORIZATION, self.settings.bearer())
            .send()
            .await
            .map_err(|e| {
                error!("Download request failed: {}", e);
                transport_error(e)
            })?;

        let status = response.status().as_u16();
        debug!(status, content_length = ?response.content_length(), "Download response");

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| WacloudError::from(transport_error(e))));
        Ok(StreamResponse::new(status, Box::pin(body)))
    }
}

/// Join `endpoint` onto the API root and append the query.
fn build_url(
    settings: &ConnectionSettings,
    endpoint: &str,
    query: &[(String, String)],
) -> WacloudResult<Url> {
    let raw = if endpoint.starts_with('/') {
        format!("{}{}", settings.api_root(), endpoint)
    } else {
        format!("{}/{}", settings.api_root(), endpoint)
    };

    let mut url = Url::parse(&raw).map_err(|e| {
        TransportError::new(TransportErrorKind::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    })?;

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

#[track_caller]
fn transport_error(e: reqwest::Error) -> TransportError {
    let message = e.to_string();
    let kind = if e.is_timeout() {
        TransportErrorKind::Timeout(message)
    } else if e.is_connect() {
        TransportErrorKind::Connect(message)
    } else if e.is_body() || e.is_decode() {
        TransportErrorKind::Body(message)
    } else {
        TransportErrorKind::Request(message)
    };
    TransportError::new(kind)
}
