//! Market endpoints
//!
//! - GET /markets - List markets with filters
//! - GET /markets/{id} - Get market by ID
//! - GET /markets/slug/{slug} - Get market by slug
//! - GET /markets/{id}/tags - Tags attached to a market

use serde::Serialize;

use super::PageParams;
use crate::client::{id_or_slug_path, path_segment};
use crate::error::Result;
use crate::types::{Market, Tag};
use crate::GammaClient;

/// Filters for GET /markets
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListMarketsParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub id: Vec<String>,
    pub slug: Vec<String>,
    pub clob_token_ids: Vec<String>,
    pub condition_ids: Vec<String>,
    pub market_maker_address: Vec<String>,
    pub question_ids: Vec<String>,
    pub liquidity_num_min: Option<f64>,
    pub liquidity_num_max: Option<f64>,
    pub volume_num_min: Option<f64>,
    pub volume_num_max: Option<f64>,
    /// ISO 8601
    pub start_date_min: Option<String>,
    pub start_date_max: Option<String>,
    pub end_date_min: Option<String>,
    pub end_date_max: Option<String>,
    pub tag_id: Option<i64>,
    pub related_tags: Option<bool>,
    pub include_tag: Option<bool>,
    pub cyom: Option<bool>,
    pub uma_resolution_status: Option<String>,
    pub game_id: Option<String>,
    pub sports_market_types: Vec<String>,
    pub rewards_min_size: Option<f64>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
}

impl GammaClient {
    /// Get one market by numeric id or by slug (any value containing `-`)
    pub async fn get_market(&self, id_or_slug: &str) -> Result<Market> {
        self.get_normalized(&id_or_slug_path("markets", id_or_slug), &()).await
    }

    pub async fn list_markets(&self, params: &ListMarketsParams) -> Result<Vec<Market>> {
        self.get_normalized("/markets", params).await
    }

    pub async fn get_market_tags(&self, id: &str) -> Result<Vec<Tag>> {
        self.get_typed(&format!("/markets/{}/tags", path_segment(id)), &()).await
    }
}
