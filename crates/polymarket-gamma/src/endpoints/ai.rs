//! AI text endpoints
//!
//! Both take a POST with a fixed `{"slug": ...}` body instead of query
//! parameters. The response schema is undocumented, so the raw JSON is
//! returned.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::GammaClient;

pub const EVENT_SUMMARY_PATH: &str = "/ai/event-summary";
pub const MARKET_EXPLANATION_PATH: &str = "/ai/market-explanation";

#[derive(Serialize)]
struct SlugBody<'a> {
    slug: &'a str,
}

impl GammaClient {
    /// Generated summary of an event
    pub async fn event_summary(&self, event_slug: &str) -> Result<Value> {
        self.post_json(EVENT_SUMMARY_PATH, &SlugBody { slug: event_slug }).await
    }

    /// Generated explanation of a market
    pub async fn market_explanation(&self, market_slug: &str) -> Result<Value> {
        self.post_json(MARKET_EXPLANATION_PATH, &SlugBody { slug: market_slug }).await
    }
}
