use serde::{Deserialize, Serialize};

/// A transfer submitted for fraud analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub value: f64,
    pub timestamp: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAnalysis {
    /// Conventionally within 0.0..=1.0
    pub risk_score: f64,
    pub is_fraudulent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub user_id: String,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub event_id: u64,
    pub event_name: String,
}
