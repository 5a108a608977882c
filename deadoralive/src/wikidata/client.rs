use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use super::source::EntitySource;
use crate::config::WikidataConfig;
use crate::error::{DeadOrAliveError, Result};
use crate::models::{Entity, LANGUAGE_EN};

/// Upper bound on hits requested from `wbsearchentities`; candidates are
/// trimmed further by the resolver.
const SEARCH_LIMIT: &str = "20";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Option<Vec<SearchHit>>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: String,
}

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, Entity>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

impl ApiErrorBody {
    fn into_error(self) -> DeadOrAliveError {
        DeadOrAliveError::Upstream(format!("{}: {}", self.code, self.info))
    }
}

#[derive(Clone)]
pub struct WikidataClient {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl WikidataClient {
    pub fn new(config: &WikidataConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeadOrAliveError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn search_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "wbsearchentities")
            .append_pair("search", term)
            .append_pair("language", LANGUAGE_EN)
            .append_pair("uselang", LANGUAGE_EN)
            .append_pair("type", "item")
            .append_pair("limit", SEARCH_LIMIT)
            .append_pair("format", "json");
        url
    }

    pub fn entities_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "wbgetentities")
            .append_pair("ids", id)
            .append_pair("format", "json");
        url
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        let body = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl EntitySource for WikidataClient {
    async fn search(&self, term: &str) -> Result<Vec<String>> {
        let body = self.get_text(self.search_url(term)).await?;
        let response: SearchResponse = serde_json::from_str(&body)?;

        if let Some(error) = response.error {
            tracing::warn!(code = %error.code, "Wikidata search reported an error");
            return Err(error.into_error());
        }

        let ids: Vec<String> = response
            .search
            .unwrap_or_default()
            .into_iter()
            .map(|hit| hit.id)
            .collect();

        tracing::debug!(term, hits = ids.len(), "Wikidata search completed");
        Ok(ids)
    }

    async fn entity(&self, id: &str) -> Result<Entity> {
        let body = self.get_text(self.entities_url(id)).await?;
        let mut response: EntitiesResponse = serde_json::from_str(&body)?;

        if let Some(error) = response.error {
            tracing::warn!(id, code = %error.code, "Wikidata entity fetch reported an error");
            return Err(error.into_error());
        }

        match response.entities.remove(id) {
            Some(entity) if !entity.is_missing() => Ok(entity),
            _ => Err(DeadOrAliveError::Upstream(format!(
                "Entity {id} missing from wbgetentities response"
            ))),
        }
    }
}
