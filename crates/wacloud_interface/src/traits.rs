//! Transport trait.

use crate::{ApiRequest, RawResponse, StreamResponse};
use async_trait::async_trait;
use std::sync::Arc;
use wacloud_error::WacloudResult;

/// Issues authenticated requests against the Graph API.
///
/// Implementations hold only immutable connection settings and never retry.
/// A status outside the success range is not an error at this level; callers
/// inspect the returned status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to `base-uri/version/endpoint` and read the whole body.
    ///
    /// Network failures (DNS, TLS, timeout, reset) are returned as
    /// `TransportError`.
    async fn send(&self, request: &ApiRequest) -> WacloudResult<RawResponse>;

    /// Authenticated GET against an absolute URL, returning the body as a
    /// lazily consumed stream.
    ///
    /// The connection stays open until the stream is drained or dropped.
    async fn stream(&self, url: &str) -> WacloudResult<StreamResponse>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: &ApiRequest) -> WacloudResult<RawResponse> {
        (**self).send(request).await
    }

    async fn stream(&self, url: &str) -> WacloudResult<StreamResponse> {
        (**self).stream(url).await
    }
}
