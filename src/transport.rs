//! HTTP transport layer.
//!
//! The client talks to the network through the [`HttpTransport`] trait so
//! tests can substitute a recording mock and callers can inject their own
//! pre-authorized transport (for example one that handles OAuth2 token
//! refresh itself).

use crate::errors::{MollieError, MollieResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP transport abstraction for testability and transport injection.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute an HTTP request and read the response body to completion.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> MollieResult<HttpResponse>;
}

/// A fully-read HTTP response.
///
/// The underlying stream is consumed and closed during construction; the
/// captured bytes are the only source of payload reads afterwards.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers, available even on failures (rate-limit hints etc.)
    pub headers: HeaderMap,
    /// The captured body bytes
    pub body: Bytes,
}

impl HttpResponse {
    /// Decodes the captured body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> MollieResult<T> {
        serde_json::from_slice(&self.body).map_err(MollieError::from)
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A decoded payload together with the response it was decoded from.
///
/// Derefs to the payload, so field access reads naturally; `response` keeps
/// headers (rate-limit hints etc.) reachable on the success path.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The full captured response
    pub response: HttpResponse,
    /// The decoded payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Discards the response wrapper and yields the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> std::ops::Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Reqwest-based HTTP transport implementation.
///
/// Imposes no timeout and performs no retries; both are left to the caller
/// (dropping the returned future aborts the in-flight call). Redirects are
/// followed by reqwest's default policy.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport backed by a fresh connection pool.
    pub fn new() -> MollieResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MollieError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`, sharing its connection pool.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> MollieResult<HttpResponse> {
        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
