//! End-to-end tests against a local mock Gamma server using the default
//! reqwest transport.

use std::time::Duration;

use polymarket_gamma::{
    EncodedList, GammaClient, GammaConfig, ListMarketsParams, PageParams, SearchParams,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GammaClient {
    GammaClient::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn get_market_by_slug_normalizes_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets/slug/btc-up-or-down"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "253591",
            "slug": "btc-up-or-down",
            "outcomes": "[\"Up\", \"Down\"]",
            "outcomePrices": "[\"0.52\", \"0.48\"]",
            "clobTokenIds": "[\"111\", \"222\"]",
            "umaResolutionStatuses": "[]"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let market = client_for(&server).get_market("btc-up-or-down").await.unwrap();

    assert_eq!(market.id.as_deref(), Some("253591"));
    assert_eq!(market.outcome_tokens(), vec![("Up", "111"), ("Down", "222")]);
    assert_eq!(
        market.outcome_prices,
        Some(EncodedList::List(vec!["0.52".to_string(), "0.48".to_string()]))
    );
    assert_eq!(market.uma_resolution_statuses, Some(EncodedList::List(vec![])));
}

#[tokio::test]
async fn get_market_by_id_uses_plain_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets/253591"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 253591 })))
        .expect(1)
        .mount(&server)
        .await;

    let market = client_for(&server).get_market("253591").await.unwrap();
    assert_eq!(market.id.as_deref(), Some("253591"));
}

#[tokio::test]
async fn not_found_reports_status_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_market("999").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn list_markets_repeats_array_params_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "outcomes": "[\"Yes\",\"No\"]" },
            { "id": "2", "outcomes": "[1,2" }
        ])))
        .mount(&server)
        .await;

    let params = ListMarketsParams {
        page: PageParams { limit: Some(2), ..Default::default() },
        id: vec!["9".into(), "4".into(), "7".into()],
        tag_id: None,
        ..Default::default()
    };
    let markets = client_for(&server).list_markets(&params).await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].outcomes, Some(EncodedList::List(vec!["Yes".into(), "No".into()])));
    assert_eq!(markets[1].outcomes, Some(EncodedList::Raw("[1,2".into())));

    let requests = server.received_requests().await.unwrap();
    let ids: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(ids, ["9", "4", "7"]);

    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("tag_id"));
    assert!(!query.contains("closed"));
}

#[tokio::test]
async fn search_passes_query_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public-search"))
        .and(query_param("q", "fed rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{ "id": "1", "title": "Fed decision" }],
            "pagination": { "hasMore": false, "totalResults": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search(&SearchParams::new("fed rates")).await.unwrap();
    assert_eq!(results.events.unwrap()[0].title.as_deref(), Some("Fed decision"));
}

#[tokio::test]
async fn event_summary_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/event-summary"))
        .and(body_json(json!({ "slug": "us-election" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "tight race" })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server).event_summary("us-election").await.unwrap();
    assert_eq!(summary["summary"], "tight race");
}

#[tokio::test]
async fn default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sports"))
        .and(header("x-client", "pm-gamma-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "sport": "nba" }])))
        .expect(1)
        .mount(&server)
        .await;

    let config = GammaConfig::default()
        .with_base_url(server.uri())
        .with_header("X-Client", "pm-gamma-tests");
    let sports = GammaClient::with_config(config).unwrap().list_sports().await.unwrap();
    assert_eq!(sports[0].sport.as_deref(), Some("nba"));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = GammaConfig::default().with_base_url(server.uri()).with_timeout_ms(100);
    let err = GammaClient::with_config(config)
        .unwrap()
        .list_teams(&Default::default())
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_tags(&Default::default()).await.unwrap_err();
    assert!(matches!(err, polymarket_gamma::GammaError::Decode(_)));
}

#[tokio::test]
async fn identifier_stays_in_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets/123%3Fclosed%3Dtrue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "123" })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).get_market("123?closed=true").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn connectivity_check_requests_one_market() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "1" }])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).test_connectivity().await.unwrap();
}

#[tokio::test]
async fn connectivity_check_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).test_connectivity().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}
