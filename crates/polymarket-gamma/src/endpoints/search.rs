//! Free-text search
//!
//! - GET /public-search

use serde::Serialize;

use crate::error::Result;
use crate::types::SearchResults;
use crate::GammaClient;

#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchParams {
    pub q: String,
    pub cache: Option<bool>,
    /// `active`, `closed` or `all`
    pub events_status: Option<String>,
    pub limit_per_type: Option<u32>,
    pub page: Option<u32>,
    pub events_tag: Vec<String>,
    pub keep_closed_markets: Option<u32>,
    pub sort: Option<String>,
    pub ascending: Option<bool>,
    pub search_tags: Option<bool>,
    pub search_profiles: Option<bool>,
    pub recurrence: Option<String>,
    pub exclude_tag_id: Vec<i64>,
    pub optimized: Option<bool>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into(), ..Default::default() }
    }
}

impl GammaClient {
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResults> {
        self.get_normalized("/public-search", params).await
    }
}
