mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deadoralive::error::DeadOrAliveError;
use deadoralive::wikidata::{EntitySource, WikidataClient};

use common::{entity_body, error_body, search_body, wikidata_config, API_PATH};

async fn client_for(server: &MockServer) -> WikidataClient {
    common::init_test_logger();
    WikidataClient::new(&wikidata_config(server)).expect("client should be created")
}

#[tokio::test]
async fn search_returns_ids_in_upstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "wbsearchentities"))
        .and(query_param("search", "steve jobs"))
        .and(query_param("language", "en"))
        .and(query_param("type", "item"))
        .and(header("user-agent", "deadoralive-tests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_body(&["Q19837", "Q7614", "Q1"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let ids = client.search("steve jobs").await.expect("search should succeed");

    assert_eq!(ids, vec!["Q19837", "Q7614", "Q1"]);
}

#[tokio::test]
async fn search_without_hits_is_empty() {
    let server = MockServer::start().await;
    common::mount_search(&server, "zzzz", search_body(&[])).await;

    let client = client_for(&server).await;
    let ids = client.search("zzzz").await.expect("search should succeed");

    assert!(ids.is_empty());
}

#[tokio::test]
async fn search_error_object_is_upstream_error() {
    let server = MockServer::start().await;
    common::mount_search(&server, "bowie", error_body("maxlag")).await;

    let client = client_for(&server).await;
    let err = client.search("bowie").await.unwrap_err();

    match err {
        DeadOrAliveError::Upstream(msg) => assert!(msg.starts_with("maxlag")),
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.search("bowie").await.unwrap_err();

    assert!(matches!(err, DeadOrAliveError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.search("bowie").await.unwrap_err();

    assert!(matches!(err, DeadOrAliveError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn entity_is_parsed() {
    let server = MockServer::start().await;
    common::mount_entity(
        &server,
        "Q19837",
        entity_body(
            "Q19837",
            "Steve Jobs",
            Some("Steve Jobs"),
            "Q5",
            Some("+1955-02-24T00:00:00Z"),
            Some("+2011-10-05T00:00:00Z"),
        ),
    )
    .await;

    let client = client_for(&server).await;
    let entity = client.entity("Q19837").await.expect("entity should load");

    assert_eq!(entity.id, "Q19837");
    assert!(entity.is_human());
    assert!(entity.has_enwiki_article());
    assert_eq!(entity.english_label(), Some("Steve Jobs"));
}

#[tokio::test]
async fn missing_entity_is_upstream_error() {
    let server = MockServer::start().await;
    common::mount_entity(
        &server,
        "Q999999999",
        json!({ "entities": { "Q999999999": { "id": "Q999999999", "missing": "" } }, "success": 1 }),
    )
    .await;

    let client = client_for(&server).await;
    let err = client.entity("Q999999999").await.unwrap_err();

    assert!(matches!(err, DeadOrAliveError::Upstream(_)), "got {err:?}");
}

#[tokio::test]
async fn entity_error_object_is_upstream_error() {
    let server = MockServer::start().await;
    common::mount_entity(&server, "Q1", error_body("no-such-entity")).await;

    let client = client_for(&server).await;
    let err = client.entity("Q1").await.unwrap_err();

    assert!(err.is_upstream());
}
