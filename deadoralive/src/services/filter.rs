//! Selection of human entities among resolved candidates.
//!
//! Both modes keep the resolver's relevance order and never re-rank.

use crate::error::{DeadOrAliveError, Result};
use crate::models::Entity;

/// First candidate that is a human with an English Wikipedia article.
pub fn first_person(entities: Vec<Entity>) -> Result<Entity> {
    entities
        .into_iter()
        .find(|entity| entity.is_human() && entity.has_enwiki_article())
        .ok_or_else(|| {
            DeadOrAliveError::NotFound("No human with an English article among candidates".into())
        })
}

/// Every candidate that is a human. The article link is not required here.
pub fn all_people(entities: Vec<Entity>) -> Result<Vec<Entity>> {
    let people: Vec<Entity> = entities.into_iter().filter(Entity::is_human).collect();

    if people.is_empty() {
        return Err(DeadOrAliveError::NotFound(
            "No human among candidates".into(),
        ));
    }

    Ok(people)
}
