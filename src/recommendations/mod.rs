use crate::models::{Recommendation, RecommendationQuery};
use async_trait::async_trait;

#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Returns at most `query.limit` events, best match first.
    async fn recommend(&self, query: &RecommendationQuery) -> anyhow::Result<Vec<Recommendation>>;
}

/// Placeholder engine: the same short catalogue for every user.
#[derive(Debug, Clone)]
pub struct StaticRecommendations {
    catalogue: Vec<Recommendation>,
}

impl StaticRecommendations {
    pub fn new(catalogue: Vec<Recommendation>) -> Self {
        Self { catalogue }
    }
}

impl Default for StaticRecommendations {
    fn default() -> Self {
        Self::new(vec![
            Recommendation {
                event_id: 1,
                event_name: "Concert A".to_string(),
            },
            Recommendation {
                event_id: 2,
                event_name: "Festival B".to_string(),
            },
        ])
    }
}

#[async_trait]
impl RecommendationEngine for StaticRecommendations {
    async fn recommend(&self, query: &RecommendationQuery) -> anyhow::Result<Vec<Recommendation>> {
        Ok(self.catalogue.iter().take(query.limit).cloned().collect())
    }
}
