// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deadoralive::config::{Config, WikidataConfig};

pub const API_PATH: &str = "/w/api.php";

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn wikidata_config(server: &MockServer) -> WikidataConfig {
    WikidataConfig {
        base_url: format!("{}{}", server.uri(), API_PATH),
        user_agent: "deadoralive-tests".to_string(),
        timeout_secs: 5,
        ..WikidataConfig::default()
    }
}

pub fn config(server: &MockServer) -> Config {
    Config {
        wikidata: wikidata_config(server),
        ..Config::default()
    }
}

pub fn search_body(ids: &[&str]) -> Value {
    let hits: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "searchinfo": { "search": "" }, "search": hits, "success": 1 })
}

pub fn error_body(code: &str) -> Value {
    json!({ "error": { "code": code, "info": "Something went wrong upstream" } })
}

fn time_claim(property: &str, time: &str) -> Value {
    json!([{
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datavalue": {
                "type": "time",
                "value": { "time": time, "precision": 11, "calendarmodel": "http://www.wikidata.org/entity/Q1985727" }
            }
        },
        "rank": "normal"
    }])
}

/// A `wbgetentities` payload holding a single item.
pub fn entity_body(
    id: &str,
    label: &str,
    enwiki_title: Option<&str>,
    instance_of: &str,
    born: Option<&str>,
    died: Option<&str>,
) -> Value {
    let mut claims = json!({
        "P31": [{
            "mainsnak": {
                "snaktype": "value",
                "property": "P31",
                "datavalue": { "type": "wikibase-entityid", "value": { "entity-type": "item", "id": instance_of } }
            },
            "rank": "normal"
        }]
    });
    if let Some(born) = born {
        claims["P569"] = time_claim("P569", born);
    }
    if let Some(died) = died {
        claims["P570"] = time_claim("P570", died);
    }

    let sitelinks = match enwiki_title {
        Some(title) => json!({ "enwiki": { "site": "enwiki", "title": title, "badges": [] } }),
        None => json!({}),
    };

    json!({
        "entities": {
            id: {
                "type": "item",
                "id": id,
                "labels": { "en": { "language": "en", "value": label } },
                "claims": claims,
                "sitelinks": sitelinks
            }
        },
        "success": 1
    })
}

pub async fn mount_search(server: &MockServer, term: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "wbsearchentities"))
        .and(query_param("search", term))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_entity(server: &MockServer, id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "wbgetentities"))
        .and(query_param("ids", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
