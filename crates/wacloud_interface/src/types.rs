//! Values exchanged with a [`Transport`](crate::Transport).

use bytes::Bytes;
use derive_getters::Getters;
use futures_util::stream::Stream;
use serde::Serialize;
use std::pin::Pin;
use wacloud_error::{JsonError, WacloudResult};

/// Lazily consumed response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = WacloudResult<Bytes>> + Send>>;

/// HTTP verb of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Method {
    /// GET
    #[display("GET")]
    Get,
    /// POST
    #[display("POST")]
    Post,
    /// DELETE
    #[display("DELETE")]
    Delete,
}

/// A request relative to `base-uri/version`.
///
/// # Examples
///
/// ```
/// use wacloud_interface::{ApiRequest, Method};
///
/// let request = ApiRequest::get("/12345").with_query("fields", "url,mime_type");
/// assert_eq!(*request.method(), Method::Get);
/// assert_eq!(request.endpoint(), "/12345");
/// assert_eq!(request.query().len(), 1);
/// assert!(request.body().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ApiRequest {
    /// Path below the version segment, starting with `/`
    endpoint: String,
    /// HTTP verb
    method: Method,
    /// Query parameters, encoded by the transport
    query: Vec<(String, String)>,
    /// Serialized JSON body
    body: Option<Bytes>,
}

impl ApiRequest {
    /// Creates a request with no query and no body.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            query: Vec::new(),
            body: None,
        }
    }

    /// GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    /// DELETE request.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns a `JsonError` if serialization fails.
    pub fn with_json<T>(mut self, body: &T) -> WacloudResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            JsonError::new(format!("Failed to serialize request body: {}", e))
        })?;
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }
}

/// Fully read response.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RawResponse {
    /// HTTP status code
    status: u16,
    /// Raw body bytes
    body: Bytes,
}

impl RawResponse {
    /// Creates a response from a status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Response whose body has not been read yet.
pub struct StreamResponse {
    status: u16,
    body: ByteStream,
}

impl StreamResponse {
    /// Creates a response from a status and body stream.
    pub fn new(status: u16, body: ByteStream) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Takes the body stream.
    pub fn into_body(self) -> ByteStream {
        self.body
    }
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
