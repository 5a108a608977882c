use async_trait::async_trait;

use crate::error::Result;
use crate::models::Entity;

/// Upstream knowledge base the lookup pipeline reads from.
///
/// Implementations perform no caching: every call reaches the source.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Entity ids matching `term`, in upstream relevance order.
    ///
    /// An empty vector means the source answered with no hits. An error
    /// condition reported inside the payload is a `DeadOrAliveError::Upstream`.
    async fn search(&self, term: &str) -> Result<Vec<String>>;

    /// Full record for one entity id.
    async fn entity(&self, id: &str) -> Result<Entity>;
}
