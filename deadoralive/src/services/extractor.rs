use chrono::NaiveDate;

use crate::models::{Entity, PersonModel, PROPERTY_DATE_OF_BIRTH, PROPERTY_DATE_OF_DEATH};
use crate::wikidata::time::parse_timestamp;

const WIKIPEDIA_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Article URL for an English Wikipedia title, using Wikipedia's slug rules
/// for spaces and parentheses.
pub fn article_url(title: &str) -> String {
    let slug = title
        .replace(' ', "_")
        .replace('(', "%28")
        .replace(')', "%29");
    format!("{WIKIPEDIA_ARTICLE_BASE}{slug}")
}

/// First date recorded for `property`. A timestamp that cannot be parsed is
/// treated like a missing fact.
fn date_fact(entity: &Entity, property: &str) -> Option<NaiveDate> {
    let raw = entity.first_time_value(property)?;
    match parse_timestamp(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(entity = %entity.id, property, error = %e, "Ignoring date fact");
            None
        }
    }
}

/// Build a [`PersonModel`] from a person entity.
pub fn extract(entity: &Entity) -> PersonModel {
    let title = entity.enwiki_title();

    let name = entity
        .english_label()
        .or(title)
        .unwrap_or(entity.id.as_str())
        .to_string();

    PersonModel {
        name,
        date_of_birth: date_fact(entity, PROPERTY_DATE_OF_BIRTH),
        date_of_death: date_fact(entity, PROPERTY_DATE_OF_DEATH),
        url: title.map(article_url),
        custom_message: None,
    }
}
