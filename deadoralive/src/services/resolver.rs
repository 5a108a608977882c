use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{DeadOrAliveError, Result};
use crate::models::Entity;
use crate::wikidata::EntitySource;

/// Turns a search term into candidate entities.
#[derive(Clone)]
pub struct EntityResolver {
    source: Arc<dyn EntitySource>,
    max_candidates: usize,
    fetch_timeout: Option<Duration>,
}

impl EntityResolver {
    pub fn new(
        source: Arc<dyn EntitySource>,
        max_candidates: usize,
        fetch_timeout: Option<Duration>,
    ) -> Self {
        Self {
            source,
            max_candidates: max_candidates.max(1),
            fetch_timeout,
        }
    }

    /// Candidate ids in upstream relevance order, at most `max_candidates`.
    pub async fn resolve_candidates(&self, search_term: &str) -> Result<Vec<String>> {
        let mut ids = self.source.search(search_term).await?;

        if ids.is_empty() {
            return Err(DeadOrAliveError::NotFound(format!(
                "No search results for '{search_term}'"
            )));
        }

        ids.truncate(self.max_candidates);
        Ok(ids)
    }

    /// Fetch every entity concurrently, keeping the order of `ids`.
    ///
    /// The first failure fails the whole batch and drops the fetches still in
    /// flight. The optional timeout bounds the batch as a whole.
    pub async fn fetch_entities(&self, ids: &[String]) -> Result<Vec<Entity>> {
        let fan_out = try_join_all(ids.iter().map(|id| self.source.entity(id)));

        let entities = match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fan_out)
                .await
                .map_err(|_| DeadOrAliveError::Timeout(limit.as_secs()))??,
            None => fan_out.await?,
        };

        tracing::debug!(count = entities.len(), "Fetched candidate entities");
        Ok(entities)
    }

    pub async fn resolve(&self, search_term: &str) -> Result<Vec<Entity>> {
        let ids = self.resolve_candidates(search_term).await?;
        self.fetch_entities(&ids).await
    }
}
