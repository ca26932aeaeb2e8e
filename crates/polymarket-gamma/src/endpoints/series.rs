//! Series endpoints
//!
//! - GET /series
//! - GET /series/{id}

use serde::Serialize;

use super::PageParams;
use crate::client::path_segment;
use crate::error::Result;
use crate::types::Series;
use crate::GammaClient;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListSeriesParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub slug: Vec<String>,
    pub categories_ids: Vec<i64>,
    pub categories_labels: Vec<String>,
    pub closed: Option<bool>,
    pub include_chat: Option<bool>,
    pub recurrence: Option<String>,
}

impl GammaClient {
    pub async fn list_series(&self, params: &ListSeriesParams) -> Result<Vec<Series>> {
        self.get_normalized("/series", params).await
    }

    pub async fn get_series(&self, id: &str) -> Result<Series> {
        self.get_normalized(&format!("/series/{}", path_segment(id)), &()).await
    }
}
