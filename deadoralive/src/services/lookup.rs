use std::sync::Arc;
use std::time::Duration;

use super::resolver::EntityResolver;
use super::{extractor, filter, formatter};
use crate::config::Config;
use crate::error::Result;
use crate::models::ResultModel;
use crate::overrides::OverrideTable;
use crate::wikidata::EntitySource;

/// Resolves a search term into dead-or-alive results.
///
/// Holds no mutable state; the override table is shared read-only.
#[derive(Clone)]
pub struct LookupService {
    overrides: Arc<OverrideTable>,
    resolver: EntityResolver,
}

impl LookupService {
    pub fn new(
        source: Arc<dyn EntitySource>,
        overrides: Arc<OverrideTable>,
        config: &Config,
    ) -> Self {
        let fetch_timeout = match config.lookup.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let resolver =
            EntityResolver::new(source, config.wikidata.max_candidates, fetch_timeout);

        Self {
            overrides,
            resolver,
        }
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Single best answer for `search_term`.
    ///
    /// Override aliases are answered without touching the upstream source.
    pub async fn resolve_single(&self, search_term: &str) -> Result<ResultModel> {
        if let Some(entry) = self.overrides.match_override(search_term) {
            tracing::debug!(search_term, name = %entry.person.name, "Answered from override table");
            return Ok(formatter::format_now(&entry.person));
        }

        let entities = self.resolver.resolve(search_term).await?;
        let person_entity = filter::first_person(entities)?;
        let person = extractor::extract(&person_entity);

        tracing::debug!(search_term, entity = %person_entity.id, "Resolved person");
        Ok(formatter::format_now(&person))
    }

    /// Every human candidate for `search_term`, in relevance order.
    ///
    /// Never fails: any error yields an empty list.
    pub async fn resolve_suggestions(&self, search_term: &str) -> Vec<ResultModel> {
        match self.try_resolve_suggestions(search_term).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(search_term, error = %e, "Suggestion lookup failed");
                Vec::new()
            }
        }
    }

    async fn try_resolve_suggestions(&self, search_term: &str) -> Result<Vec<ResultModel>> {
        let entities = self.resolver.resolve(search_term).await?;
        let people = filter::all_people(entities)?;

        Ok(people
            .iter()
            .map(|entity| formatter::format_now(&extractor::extract(entity)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeadOrAliveError;
    use crate::models::Entity;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubSource {
        hits: Vec<String>,
        entities: HashMap<String, Entity>,
        search_error: bool,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn with(entities: Vec<Entity>) -> Self {
            Self {
                hits: entities.iter().map(|e| e.id.clone()).collect(),
                entities: entities.into_iter().map(|e| (e.id.clone(), e)).collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl EntitySource for StubSource {
        async fn search(&self, _term: &str) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.search_error {
                return Err(DeadOrAliveError::Upstream("internal_api_error".into()));
            }
            Ok(self.hits.clone())
        }

        async fn entity(&self, id: &str) -> Result<Entity> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entities
                .get(id)
                .cloned()
                .ok_or_else(|| DeadOrAliveError::Upstream(format!("no entity {id}")))
        }
    }

    fn human(id: &str, name: &str, born: Option<&str>, died: Option<&str>) -> Entity {
        let mut claims = json!({
            "P31": [{"mainsnak": {"snaktype": "value", "property": "P31",
                "datavalue": {"type": "wikibase-entityid", "value": {"id": "Q5"}}}}]
        });
        for (property, time) in [("P569", born), ("P570", died)] {
            if let Some(time) = time {
                claims[property] = json!([{"mainsnak": {"snaktype": "value", "property": property,
                    "datavalue": {"type": "time", "value": {"time": time}}}}]);
            }
        }
        serde_json::from_value(json!({
            "id": id,
            "labels": {"en": {"language": "en", "value": name}},
            "sitelinks": {"enwiki": {"site": "enwiki", "title": name}},
            "claims": claims
        }))
        .unwrap()
    }

    fn service(source: Arc<StubSource>, overrides: OverrideTable) -> LookupService {
        LookupService::new(source, Arc::new(overrides), &Config::default())
    }

    #[tokio::test]
    async fn test_override_skips_upstream() {
        let source = Arc::new(StubSource::default());
        let svc = service(source.clone(), OverrideTable::builtin());

        let result = svc.resolve_single("GOD").await.unwrap();
        assert!(result.custom_message.is_some());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_override_with_dates_is_computed() {
        let source = Arc::new(StubSource::default());
        let svc = service(source.clone(), OverrideTable::builtin());

        let result = svc.resolve_single("the queen").await.unwrap();
        assert_eq!(result.name, "Elizabeth II");
        assert_eq!(result.age, Some(96));
        assert_eq!(result.date_of_death.as_deref(), Some("September 8th 2022"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_single_picks_first_human() {
        let film: Entity = serde_json::from_value(json!({
            "id": "Q1",
            "labels": {"en": {"language": "en", "value": "Steve Jobs"}},
            "sitelinks": {"enwiki": {"site": "enwiki", "title": "Steve Jobs (film)"}},
            "claims": {"P31": [{"mainsnak": {"snaktype": "value", "property": "P31",
                "datavalue": {"type": "wikibase-entityid", "value": {"id": "Q11424"}}}}]}
        }))
        .unwrap();
        let jobs = human(
            "Q19837",
            "Steve Jobs",
            Some("+1955-02-24T00:00:00Z"),
            Some("+2011-10-05T00:00:00Z"),
        );
        let svc = service(
            Arc::new(StubSource::with(vec![film, jobs])),
            OverrideTable::empty(),
        );

        let result = svc.resolve_single("steve jobs").await.unwrap();
        assert_eq!(result.name, "Steve Jobs");
        assert_eq!(result.age, Some(56));
        assert_eq!(
            result.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Steve_Jobs")
        );
    }

    #[tokio::test]
    async fn test_resolve_single_not_found_without_humans() {
        let svc = service(Arc::new(StubSource::default()), OverrideTable::empty());
        let result = svc.resolve_single("nobody at all").await;
        assert!(matches!(result, Err(DeadOrAliveError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_suggestions_return_all_humans() {
        let a = human("Q1", "Alpha Person", Some("+1950-01-01T00:00:00Z"), None);
        let b = human("Q2", "Beta Person", None, Some("+1990-05-02T00:00:00Z"));
        let svc = service(
            Arc::new(StubSource::with(vec![a, b])),
            OverrideTable::empty(),
        );

        let results = svc.resolve_suggestions("person").await;
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Person", "Beta Person"]);
        assert!(results[1].is_dead);
    }

    #[tokio::test]
    async fn test_suggestions_swallow_upstream_errors() {
        let source = StubSource {
            search_error: true,
            ..StubSource::default()
        };
        let svc = service(Arc::new(source), OverrideTable::empty());

        assert!(svc.resolve_suggestions("anyone").await.is_empty());
    }

    #[tokio::test]
    async fn test_julian_leap_day_birth_still_resolves() {
        let julian = human(
            "Q1",
            "Julian Person",
            Some("+1700-02-29T00:00:00Z"),
            Some("+1760-03-01T00:00:00Z"),
        );
        let modern = human("Q2", "Modern Person", Some("+1950-01-01T00:00:00Z"), None);
        let svc = service(
            Arc::new(StubSource::with(vec![julian, modern])),
            OverrideTable::empty(),
        );

        let single = svc.resolve_single("person").await.unwrap();
        assert_eq!(single.name, "Julian Person");
        assert_eq!(single.age, Some(60));
        assert!(single.is_dead);

        let names: Vec<String> = svc
            .resolve_suggestions("person")
            .await
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Julian Person", "Modern Person"]);
    }

    #[tokio::test]
    async fn test_unparseable_date_does_not_drop_suggestions() {
        let broken = human("Q1", "Broken Dates", Some("+1950-1-1"), None);
        let fine = human("Q2", "Fine Dates", Some("+1950-01-01T00:00:00Z"), None);
        let svc = service(
            Arc::new(StubSource::with(vec![broken, fine])),
            OverrideTable::empty(),
        );

        let single = svc.resolve_single("dates").await.unwrap();
        assert_eq!(single.name, "Broken Dates");
        assert!(!single.has_dob);

        let results = svc.resolve_suggestions("dates").await;
        assert_eq!(results.len(), 2);
        assert!(results[1].has_dob);
    }
}
