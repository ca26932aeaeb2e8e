//! Event endpoints
//!
//! - GET /events - List events with filters
//! - GET /events/pagination - Same filters, wrapped with paging metadata
//! - GET /events/{id} | /events/slug/{slug}
//! - GET /events/{id}/tags

use serde::Serialize;

use super::PageParams;
use crate::client::{id_or_slug_path, path_segment};
use crate::error::Result;
use crate::types::{Event, PaginatedEvents, Tag};
use crate::GammaClient;

/// Filters for GET /events and GET /events/pagination
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListEventsParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub id: Vec<String>,
    pub slug: Vec<String>,
    pub tag_id: Option<i64>,
    pub tag_slug: Option<String>,
    pub exclude_tag_id: Vec<i64>,
    pub related_tags: Option<bool>,
    pub featured: Option<bool>,
    pub cyom: Option<bool>,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
    pub recurrence: Option<String>,
    pub liquidity_min: Option<f64>,
    pub liquidity_max: Option<f64>,
    pub volume_min: Option<f64>,
    pub volume_max: Option<f64>,
    pub start_date_min: Option<String>,
    pub start_date_max: Option<String>,
    pub end_date_min: Option<String>,
    pub end_date_max: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
}

impl GammaClient {
    /// Get one event by id or slug (any value containing `-`)
    pub async fn get_event(&self, id_or_slug: &str) -> Result<Event> {
        self.get_normalized(&id_or_slug_path("events", id_or_slug), &()).await
    }

    pub async fn list_events(&self, params: &ListEventsParams) -> Result<Vec<Event>> {
        self.get_normalized("/events", params).await
    }

    /// List events with `hasMore` / `totalResults` metadata
    pub async fn list_events_paginated(&self, params: &ListEventsParams) -> Result<PaginatedEvents> {
        self.get_normalized("/events/pagination", params).await
    }

    pub async fn get_event_tags(&self, id: &str) -> Result<Vec<Tag>> {
        self.get_typed(&format!("/events/{}/tags", path_segment(id)), &()).await
    }
}
