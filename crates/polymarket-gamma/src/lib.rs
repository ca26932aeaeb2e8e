//! Polymarket Gamma API client
//!
//! Thin typed client for the Gamma market-data REST API:
//! - `client`: request executor (URL + query building, headers, timeout,
//!   response classification)
//! - `normalize`: parses fields the API sends as JSON-encoded strings
//!   (`outcomes`, `outcomePrices`, `clobTokenIds`, `umaResolutionStatuses`)
//! - `endpoints`: typed accessors for markets, events, tags, sports, series,
//!   comments, search and the AI text endpoints
//! - `transport`: injectable network seam (default: reqwest)
//!
//! No authentication, rate limiting, retries or caching; wrap the transport
//! for those.
//!
//! # Official Documentation
//! - Endpoints: https://docs.polymarket.com/quickstart/reference/endpoints
//! - Gamma Structure: https://docs.polymarket.com/developers/gamma-markets-api/gamma-structure

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod normalize;
pub mod query;
pub mod transport;
pub mod types;

pub use client::GammaClient;
pub use config::GammaConfig;
pub use endpoints::*;
pub use error::{GammaError, Result, TransportError};
pub use normalize::{normalize, normalize_in_place, STRINGIFIED_ARRAY_FIELDS};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use types::*;

/// Official Gamma API base URL (market discovery)
/// Source: https://docs.polymarket.com/quickstart/reference/endpoints
pub const GAMMA_API_BASE: &str = "https://gamma-api.polymarket.com";
