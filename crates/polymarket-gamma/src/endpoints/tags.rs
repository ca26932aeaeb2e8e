//! Tag endpoints
//!
//! - GET /tags
//! - GET /tags/{id} | /tags/slug/{slug}
//! - GET /tags/{id}/related-tags | /tags/slug/{slug}/related-tags
//! - GET /tags/{id}/related-tags/tags | /tags/slug/{slug}/related-tags/tags

use serde::Serialize;

use super::PageParams;
use crate::client::id_or_slug_path;
use crate::error::Result;
use crate::types::{RelatedTag, Tag};
use crate::GammaClient;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListTagsParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub include_template: Option<bool>,
    pub is_carousel: Option<bool>,
}

/// Filters for the related-tag lookups
#[derive(Clone, Debug, Default, Serialize)]
pub struct RelatedTagsParams {
    /// Drop relationships whose related tag has no active content
    pub omit_empty: Option<bool>,
    /// `active`, `closed` or `all`
    pub status: Option<String>,
}

impl GammaClient {
    pub async fn list_tags(&self, params: &ListTagsParams) -> Result<Vec<Tag>> {
        self.get_typed("/tags", params).await
    }

    pub async fn get_tag(&self, id_or_slug: &str) -> Result<Tag> {
        self.get_typed(&id_or_slug_path("tags", id_or_slug), &()).await
    }

    /// Relationship links for a tag
    pub async fn get_related_tags(
        &self,
        id_or_slug: &str,
        params: &RelatedTagsParams,
    ) -> Result<Vec<RelatedTag>> {
        let path = format!("{}/related-tags", id_or_slug_path("tags", id_or_slug));
        self.get_typed(&path, params).await
    }

    /// The tag records a tag is related to
    pub async fn get_related_tag_records(
        &self,
        id_or_slug: &str,
        params: &RelatedTagsParams,
    ) -> Result<Vec<Tag>> {
        let path = format!("{}/related-tags/tags", id_or_slug_path("tags", id_or_slug));
        self.get_typed(&path, params).await
    }
}
