//! Gamma API request executor
//!
//! Base URL: https://gamma-api.polymarket.com
//!
//! [`GammaClient`] shapes every call the same way:
//! 1. Resolve the target (relative path or absolute URL) and append query pairs
//! 2. Attach `Content-Type: application/json` plus configured default headers
//! 3. Run the transport under the configured timeout
//! 4. Classify: transport error / timeout / non-2xx status / JSON body
//!
//! The typed accessors live in [`crate::endpoints`]; each is one call here,
//! optionally followed by [`normalize`](crate::normalize::normalize).

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::GammaConfig;
use crate::error::{GammaError, Result};
use crate::normalize::normalize;
use crate::query::{to_query_pairs, QueryPairs};
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// Gamma API client
///
/// Cheap to clone; clones share the transport (and its connection pool).
#[derive(Clone)]
pub struct GammaClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
}

impl std::fmt::Debug for GammaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GammaClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GammaClient {
    /// Create a new Gamma client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(GammaConfig::default())
    }

    /// Create a new Gamma client with custom base URL
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(GammaConfig::default().with_base_url(base_url))
    }

    /// Create a client using the default reqwest transport
    pub fn with_config(config: GammaConfig) -> Result<Self> {
        let transport = ReqwestTransport::new().map_err(GammaError::ClientBuild)?;
        Self::with_transport(config, transport)
    }

    /// Create a client with a caller-supplied transport
    pub fn with_transport(config: GammaConfig, transport: impl Transport) -> Result<Self> {
        let headers = build_headers(&config)?;

        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for a relative path or absolute `http(s)://` target
    pub fn build_url<P: Serialize + ?Sized>(&self, target: &str, params: &P) -> Result<Url> {
        let pairs = to_query_pairs(params)?;
        self.resolve_url(target, &pairs)
    }

    fn resolve_url(&self, target: &str, pairs: &QueryPairs) -> Result<Url> {
        let raw = if has_http_scheme(target) {
            target.to_string()
        } else if target.starts_with('/') {
            format!("{}{}", self.base_url, target)
        } else {
            format!("{}/{}", self.base_url, target)
        };

        let mut url =
            Url::parse(&raw).map_err(|source| GammaError::InvalidUrl { url: raw.clone(), source })?;

        // query_pairs_mut() on an empty set would still leave a bare `?`
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        Ok(url)
    }

    /// GET a target with query parameters, returning raw JSON
    pub async fn get_json<P: Serialize + ?Sized>(&self, target: &str, params: &P) -> Result<Value> {
        let url = self.build_url(target, params)?;
        self.execute(Method::GET, url, None).await
    }

    /// POST a JSON body to a target, returning raw JSON
    pub async fn post_json<B: Serialize + ?Sized>(&self, target: &str, body: &B) -> Result<Value> {
        let url = self.resolve_url(target, &QueryPairs::new())?;
        let body = serde_json::to_vec(body).map_err(GammaError::Encode)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    /// GET, normalize stringified-array fields, decode into `T`
    pub(crate) async fn get_normalized<T, P>(&self, target: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let value = normalize(self.get_json(target, params).await?);
        serde_json::from_value(value).map_err(GammaError::Decode)
    }

    /// GET and decode into `T` without normalization
    pub(crate) async fn get_typed<T, P>(&self, target: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let value = self.get_json(target, params).await?;
        serde_json::from_value(value).map_err(GammaError::Decode)
    }

    /// Run one call through the transport under the client timeout
    async fn execute(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Value> {
        debug!("{} {}", method, url);

        let request = TransportRequest { method, url, headers: self.headers.clone(), body };
        let url = request.url.clone();

        let response = tokio::time::timeout(self.timeout, self.transport.send(request))
            .await
            .map_err(|_| {
                debug!("Timed out after {:?}: {}", self.timeout, url);
                GammaError::Timeout(self.timeout)
            })?
            .map_err(GammaError::Transport)?;

        debug!("HTTP {} {} for {}", response.status, response.status_text, url);

        if !response.is_success() {
            return Err(GammaError::Status {
                status: response.status,
                status_text: response.status_text,
            });
        }

        response.json().map_err(GammaError::Decode)
    }

    /// Test connectivity to Gamma API
    pub async fn test_connectivity(&self) -> Result<()> {
        debug!("Testing connectivity to {}", self.base_url);
        self.get_json("/markets", &serde_json::json!({ "limit": 1 })).await?;
        debug!("Gamma connectivity test: OK");
        Ok(())
    }
}

/// Route an identifier: hyphenated values are slugs, everything else an id.
///
/// Known limitation: ids that legitimately contain hyphens (UUIDs) are
/// routed to the slug form.
pub fn id_or_slug_path(collection: &str, id_or_slug: &str) -> String {
    let segment = path_segment(id_or_slug);
    if id_or_slug.contains('-') {
        format!("/{}/slug/{}", collection, segment)
    } else {
        format!("/{}/{}", collection, segment)
    }
}

/// Percent-encode a value for use as a single path segment.
///
/// `/`, `?` and `#` are escaped so the value can never leave its segment.
pub fn path_segment(value: &str) -> String {
    // form encoding writes spaces as `+`; a literal `+` is already `%2B`
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn has_http_scheme(target: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        target.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn build_headers(config: &GammaConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in &config.default_headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| GammaError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| GammaError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
