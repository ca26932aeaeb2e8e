//! Network transport seam
//!
//! The executor in [`GammaClient`](crate::GammaClient) shapes requests and
//! classifies responses; the actual network call goes through a [`Transport`].
//! Wrap [`ReqwestTransport`] (or any closure) to add logging, retries,
//! caching or rate limiting without touching the executor.
//!
//! ```ignore
//! let inner = ReqwestTransport::new()?;
//! let logged = move |req: TransportRequest| {
//!     let inner = inner.clone();
//!     async move {
//!         tracing::info!("{} {}", req.method, req.url);
//!         inner.send(req).await
//!     }
//! };
//! let client = GammaClient::with_transport(GammaConfig::default(), logged)?;
//! ```

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::error::TransportError;

/// A fully shaped request handed to the transport
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw response returned by the transport, body fully read
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self { status, status_text: status_text.into(), body: body.into() }
    }

    /// 2xx response
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

/// Performs a single network call.
///
/// Dropping the returned future must abandon the call; the client relies on
/// this to enforce its timeout.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>>;
}

/// Any `Fn(TransportRequest) -> impl Future` closure is a transport
impl<F, Fut> Transport for F
where
    F: Fn(TransportRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<TransportResponse, TransportError>> + Send + 'static,
{
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>> {
        (self)(request).boxed()
    }
}

/// Default transport backed by a shared `reqwest::Client`
///
/// No client-level timeout is set here; the executor bounds each call.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Reuse an existing client (and its connection pool)
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>> {
        let mut builder =
            self.client.request(request.method, request.url).headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        execute(builder).boxed()
    }
}

async fn execute(builder: RequestBuilder) -> Result<TransportResponse, TransportError> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    Ok(TransportResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body: body.to_vec(),
    })
}
