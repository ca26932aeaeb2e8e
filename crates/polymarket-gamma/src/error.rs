//! Error types for the Gamma client
//!
//! Every accessor returns [`GammaError`]. Transport failures pass through
//! untouched so callers can downcast to the transport's own error type.

use std::time::Duration;

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum GammaError {
    /// Network/connection failure from the underlying transport
    #[error(transparent)]
    Transport(TransportError),

    /// The configured timeout elapsed before the call completed
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// Response received with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// Response body was not JSON, or not the expected record shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Query parameters or request body failed to serialize
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A configured default header has an invalid name or value
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl GammaError {
    /// True only when the call was cancelled by the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, GammaError::Timeout(_))
    }

    /// HTTP status code for [`GammaError::Status`] failures
    pub fn status(&self) -> Option<u16> {
        match self {
            GammaError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GammaError>;
