//! Scripted transport for testing.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{StreamExt, stream};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use wacloud_error::{TransportError, TransportErrorKind, WacloudError, WacloudResult};
use wacloud_interface::{ApiRequest, RawResponse, StreamResponse, Transport};

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with a status and body
    Response { status: u16, body: Bytes },
    /// Fail before any status is received
    Failure(TransportErrorKind),
}

impl MockReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self::Response {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }
}

/// Observes whether a streamed body has been dropped.
#[derive(Debug, Clone, Default)]
pub struct CloseHandle(Arc<AtomicBool>);

impl CloseHandle {
    pub fn is_closed(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

struct CloseGuard(Arc<AtomicBool>);

impl Drop for CloseGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Mock transport replaying scripted responses in order.
///
/// Requests and streamed URLs are recorded so tests can assert on what the
/// client sent.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    downloads: Mutex<VecDeque<(MockReply, CloseHandle)>>,
    requests: Mutex<Vec<ApiRequest>>,
    streamed_urls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next `send`.
    pub fn reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queue a reply for the next `stream`, returning a handle that reports
    /// when its body is dropped.
    pub fn download(&self, reply: MockReply) -> CloseHandle {
        let handle = CloseHandle::default();
        self.downloads
            .lock()
            .unwrap()
            .push_back((reply, handle.clone()));
        handle
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn streamed_urls(&self) -> Vec<String> {
        self.streamed_urls.lock().unwrap().clone()
    }
}

fn exhausted() -> TransportError {
    TransportError::new(TransportErrorKind::Request(
        "no scripted response left".to_string(),
    ))
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> WacloudResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Response { status, body }) => Ok(RawResponse::new(status, body)),
            Some(MockReply::Failure(kind)) => Err(TransportError::new(kind).into()),
            None => Err(exhausted().into()),
        }
    }

    async fn stream(&self, url: &str) -> WacloudResult<StreamResponse> {
        self.streamed_urls.lock().unwrap().push(url.to_string());
        let scripted = self.downloads.lock().unwrap().pop_front();
        match scripted {
            Some((MockReply::Response { status, body }, handle)) => {
                let guard = CloseGuard(handle.0.clone());
                // Two chunks so consumers have to reassemble.
                let split = body.len() / 2;
                let chunks = vec![body.slice(..split), body.slice(split..)];
                let body = stream::iter(chunks).map(move |chunk| {
                    let _guard = &guard;
                    Ok::<Bytes, WacloudError>(chunk)
                });
                Ok(StreamResponse::new(status, Box::pin(body)))
            }
            Some((MockReply::Failure(kind), _)) => Err(TransportError::new(kind).into()),
            None => Err(exhausted().into()),
        }
    }
}
