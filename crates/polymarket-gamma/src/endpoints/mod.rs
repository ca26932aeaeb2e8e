//! Typed Gamma API accessors
//!
//! Each accessor is a single [`GammaClient`](crate::GammaClient) call. Payloads
//! that can carry markets (markets, events, series, search) are normalized
//! before decoding.
//!
//! # Source
//! - Gamma Endpoints: https://docs.polymarket.com/developers/gamma-markets-api/markets

mod ai;
mod comments;
mod events;
mod markets;
mod search;
mod series;
mod sports;
mod tags;

use serde::Serialize;

pub use ai::{EVENT_SUMMARY_PATH, MARKET_EXPLANATION_PATH};
pub use comments::{CommentsByUserParams, ListCommentsParams};
pub use events::ListEventsParams;
pub use markets::ListMarketsParams;
pub use search::SearchParams;
pub use series::ListSeriesParams;
pub use sports::ListTeamsParams;
pub use tags::{ListTagsParams, RelatedTagsParams};

/// Paging and ordering shared by the list endpoints
#[derive(Clone, Debug, Default, Serialize)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Comma-separated sort fields, e.g. `volume24hr`
    pub order: Option<String>,
    pub ascending: Option<bool>,
}

impl PageParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit: Some(limit), offset: Some(offset), ..Default::default() }
    }
}
