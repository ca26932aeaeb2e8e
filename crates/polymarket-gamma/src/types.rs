//! Record types returned by the Gamma API
//!
//! # Design Principles
//! 1. Every field is optional; the API omits fields freely between endpoints
//! 2. Unnamed fields are preserved in `#[serde(flatten)] extra`, never dropped
//! 3. Stringified-array fields use [`EncodedList`] so an unparsable value
//!    (kept as a string by the normalizer) still decodes
//! 4. Identifiers accept JSON strings or numbers and are exposed as `String`
//!
//! # Source
//! - Gamma Structure: https://docs.polymarket.com/developers/gamma-markets-api/gamma-structure

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Field helpers
// ============================================================================

/// Deserialize an identifier that may be a JSON string or number
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Visitor};

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or numeric identifier")
        }

        fn visit_str<E: Error>(self, s: &str) -> Result<Self::Value, E> {
            Ok(Some(s.to_string()))
        }

        fn visit_string<E: Error>(self, s: String) -> Result<Self::Value, E> {
            Ok(Some(s))
        }

        fn visit_u64<E: Error>(self, n: u64) -> Result<Self::Value, E> {
            Ok(Some(n.to_string()))
        }

        fn visit_i64<E: Error>(self, n: i64) -> Result<Self::Value, E> {
            Ok(Some(n.to_string()))
        }

        fn visit_f64<E: Error>(self, n: f64) -> Result<Self::Value, E> {
            Ok(Some(n.to_string()))
        }

        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Value of a stringified-array field after normalization
///
/// `List` is the normal case. `Raw` carries a string the normalizer could
/// not parse (or one that never looked like an array), unchanged. `Other`
/// holds any remaining shape, such as an array of numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncodedList {
    List(Vec<String>),
    Raw(String),
    Other(Value),
}

impl EncodedList {
    /// The decoded elements, if this field was a real array
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            EncodedList::List(items) => Some(items),
            EncodedList::Raw(_) | EncodedList::Other(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().map_or(0, <[String]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, EncodedList::Raw(_))
    }
}

/// Parse an ISO 8601 timestamp field into Unix seconds
fn to_timestamp(field: Option<&str>) -> Option<i64> {
    field.and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.timestamp()))
}

// ============================================================================
// Markets
// ============================================================================

/// Market record from GET /markets, /markets/{id}, /markets/slug/{slug}
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,

    pub question: Option<String>,

    /// Blockchain condition identifier (CLOB)
    pub condition_id: Option<String>,

    pub slug: Option<String>,

    pub description: Option<String>,

    /// Outcome labels, e.g. `["Yes", "No"]`
    pub outcomes: Option<EncodedList>,

    /// Outcome prices as decimal strings, aligned with `outcomes`
    pub outcome_prices: Option<EncodedList>,

    /// CLOB token IDs, aligned with `outcomes`
    pub clob_token_ids: Option<EncodedList>,

    pub uma_resolution_statuses: Option<EncodedList>,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    pub active: Option<bool>,

    pub closed: Option<bool>,

    pub archived: Option<bool>,

    pub volume_num: Option<f64>,

    pub liquidity_num: Option<f64>,

    pub resolution_source: Option<String>,

    /// Parent events (present on single-market responses)
    pub events: Option<Vec<Event>>,

    pub tags: Option<Vec<Tag>>,

    /// Extra fields for forward compatibility
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Market {
    /// Outcome labels paired with their CLOB token IDs
    pub fn outcome_tokens(&self) -> Vec<(&str, &str)> {
        let outcomes = self.outcomes.as_ref().and_then(EncodedList::as_slice).unwrap_or_default();
        let tokens =
            self.clob_token_ids.as_ref().and_then(EncodedList::as_slice).unwrap_or_default();

        outcomes.iter().zip(tokens).map(|(o, t)| (o.as_str(), t.as_str())).collect()
    }

    /// Binary market with exactly two token IDs
    pub fn is_binary(&self) -> bool {
        self.clob_token_ids.as_ref().is_some_and(|ids| ids.len() == 2)
    }

    pub fn start_timestamp(&self) -> Option<i64> {
        to_timestamp(self.start_date.as_deref())
    }

    pub fn end_timestamp(&self) -> Option<i64> {
        to_timestamp(self.end_date.as_deref())
    }
}

// ============================================================================
// Events
// ============================================================================

/// Event record (a group of related markets)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,

    pub ticker: Option<String>,

    pub slug: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    pub active: Option<bool>,

    pub closed: Option<bool>,

    pub archived: Option<bool>,

    pub featured: Option<bool>,

    pub neg_risk: Option<bool>,

    pub markets: Option<Vec<Market>>,

    pub tags: Option<Vec<Tag>>,

    pub series: Option<Vec<Series>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn start_timestamp(&self) -> Option<i64> {
        to_timestamp(self.start_date.as_deref())
    }

    pub fn end_timestamp(&self) -> Option<i64> {
        to_timestamp(self.end_date.as_deref())
    }
}

/// Pagination metadata from GET /events/pagination and /public-search
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub has_more: Option<bool>,
    pub total_results: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page of events from GET /events/pagination
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaginatedEvents {
    #[serde(default)]
    pub data: Vec<Event>,
    pub pagination: Option<Pagination>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub force_show: Option<bool>,
    pub force_hide: Option<bool>,
    pub is_carousel: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Link between two tags from GET /tags/{id}/related-tags
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RelatedTag {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "tagID", default, deserialize_with = "deserialize_string_or_number")]
    pub tag_id: Option<String>,
    #[serde(rename = "relatedTagID", default, deserialize_with = "deserialize_string_or_number")]
    pub related_tag_id: Option<String>,
    pub rank: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Sports
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub league: Option<String>,
    pub record: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub alias: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sport metadata from GET /sports
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub sport: Option<String>,
    pub image: Option<String>,
    pub resolution: Option<String>,
    pub ordering: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Series
// ============================================================================

/// Recurring series of events (e.g. daily crypto up/down)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub series_type: Option<String>,
    pub recurrence: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub events: Option<Vec<Event>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentProfile {
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub proxy_wallet: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: Option<String>,
    pub body: Option<String>,
    pub parent_entity_type: Option<String>,
    #[serde(rename = "parentEntityID", default, deserialize_with = "deserialize_string_or_number")]
    pub parent_entity_id: Option<String>,
    #[serde(rename = "parentCommentID", default, deserialize_with = "deserialize_string_or_number")]
    pub parent_comment_id: Option<String>,
    pub user_address: Option<String>,
    pub created_at: Option<String>,
    pub reaction_count: Option<i64>,
    pub profile: Option<CommentProfile>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Search
// ============================================================================

/// Results of GET /public-search
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<Tag>>,
    /// Profile schema is undocumented; kept as raw JSON
    pub profiles: Option<Vec<Value>>,
    pub pagination: Option<Pagination>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_decodes_normalized_fields() {
        let market: Market = serde_json::from_value(json!({
            "id": "253591",
            "question": "Will it rain?",
            "conditionId": "0xabc",
            "slug": "will-it-rain",
            "outcomes": ["Yes", "No"],
            "outcomePrices": ["0.4", "0.6"],
            "clobTokenIds": ["111", "222"],
            "active": true,
            "closed": false,
            "volumeNum": 1234.5,
            "somethingNew": { "x": 1 }
        }))
        .unwrap();

        assert_eq!(market.id.as_deref(), Some("253591"));
        assert_eq!(market.condition_id.as_deref(), Some("0xabc"));
        assert!(market.is_binary());
        assert_eq!(market.outcome_tokens(), vec![("Yes", "111"), ("No", "222")]);
        assert_eq!(market.volume_num, Some(1234.5));
        assert_eq!(market.extra["somethingNew"], json!({ "x": 1 }));
    }

    #[test]
    fn test_market_keeps_unparsed_string() {
        let market: Market = serde_json::from_value(json!({
            "id": 7,
            "outcomes": "[1,2"
        }))
        .unwrap();

        assert_eq!(market.id.as_deref(), Some("7"));
        let outcomes = market.outcomes.unwrap();
        assert!(outcomes.is_raw());
        assert_eq!(outcomes, EncodedList::Raw("[1,2".to_string()));
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_encoded_list_other_shapes() {
        let market: Market =
            serde_json::from_value(json!({ "outcomePrices": [0.4, 0.6] })).unwrap();
        let prices = market.outcome_prices.unwrap();
        assert_eq!(prices, EncodedList::Other(json!([0.4, 0.6])));
        assert!(prices.as_slice().is_none());
    }

    #[test]
    fn test_market_timestamps() {
        let market = Market {
            start_date: Some("2024-01-01T00:00:00Z".to_string()),
            end_date: Some("not a date".to_string()),
            ..Default::default()
        };
        assert_eq!(market.start_timestamp(), Some(1_704_067_200));
        assert_eq!(market.end_timestamp(), None);
    }

    #[test]
    fn test_event_with_nested_markets() {
        let event: Event = serde_json::from_value(json!({
            "id": "903",
            "slug": "us-election",
            "title": "US Election",
            "markets": [
                { "id": "1", "clobTokenIds": ["a", "b"] },
                { "id": "2", "clobTokenIds": ["c", "d"] }
            ],
            "tags": [{ "id": 2, "label": "Politics", "slug": "politics" }]
        }))
        .unwrap();

        let markets = event.markets.unwrap();
        assert_eq!(markets.len(), 2);
        assert!(markets.iter().all(Market::is_binary));
        assert_eq!(event.tags.unwrap()[0].id.as_deref(), Some("2"));
    }

    #[test]
    fn test_related_tag_field_names() {
        let link: RelatedTag = serde_json::from_value(json!({
            "id": "15",
            "tagID": 100,
            "relatedTagID": 200,
            "rank": 1
        }))
        .unwrap();

        assert_eq!(link.tag_id.as_deref(), Some("100"));
        assert_eq!(link.related_tag_id.as_deref(), Some("200"));
        assert_eq!(link.rank, Some(1));
    }

    #[test]
    fn test_null_id_is_none() {
        let tag: Tag = serde_json::from_value(json!({ "id": null, "label": "x" })).unwrap();
        assert!(tag.id.is_none());

        let tag: Tag = serde_json::from_value(json!({ "label": "x" })).unwrap();
        assert!(tag.id.is_none());
    }

    #[test]
    fn test_paginated_events() {
        let page: PaginatedEvents = serde_json::from_value(json!({
            "data": [{ "id": "1" }, { "id": "2" }],
            "pagination": { "hasMore": true, "totalResults": 40 }
        }))
        .unwrap();

        assert_eq!(page.data.len(), 2);
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.has_more, Some(true));
        assert_eq!(pagination.total_results, Some(40));
    }
}
