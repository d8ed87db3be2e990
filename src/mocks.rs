//! Mock transport for unit tests.
//!
//! Records every request the client builds and replays queued responses, so
//! tests can assert on the exact method, URL, headers and body a call
//! produced without touching the network.

use crate::errors::{MollieError, MollieResult};
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// One request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl RecordedRequest {
    /// The request body decoded as a JSON value.
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or(b"null")).unwrap()
    }
}

/// Recording transport with a FIFO queue of canned responses.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<MollieResult<HttpResponse>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a fully built response, headers included.
    pub fn enqueue(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queues a JSON response with the given status.
    pub fn enqueue_json(&self, status: u16, body: &str) {
        self.enqueue(HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        });
    }

    /// Queues an empty-body response, e.g. a 204.
    pub fn enqueue_empty(&self, status: u16) {
        self.enqueue_json(status, "");
    }

    /// Queues a transport-level failure.
    pub fn enqueue_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(MollieError::Transport {
                message: message.to_string(),
            }));
    }

    /// Everything recorded so far, in call order.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> MollieResult<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url,
            headers,
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(MollieError::Transport {
                    message: "mock transport: no response queued".to_string(),
                })
            })
    }
}
