use crate::models::{FraudAnalysis, Recommendation};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Response for GET /health
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// What `/log` captured about the incoming request.
#[derive(Debug, Serialize)]
pub struct RequestDetails {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timestamp: String,
    pub remote_addr: Option<String>,
    /// Only present for POST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Response for GET|POST /log
#[derive(Serialize)]
pub struct LogResponse {
    pub message: &'static str,
    pub request_details: RequestDetails,
}

/// Response for POST /fraud
#[derive(Serialize)]
pub struct FraudResponse {
    pub analysis: FraudAnalysis,
}

/// Query string for GET /recommendations. Kept untyped so a bad `limit`
/// falls back to the default instead of rejecting the request.
#[derive(Debug, Default, PartialEq)]
pub struct RecommendationParams {
    pub user_id: Option<String>,
    pub limit: Option<String>,
}

impl RecommendationParams {
    /// The first occurrence of a repeated key wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "userId" => &mut params.user_id,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Response for GET /recommendations
#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_occurrence_wins() {
        let params = RecommendationParams::from_pairs(pairs(&[
            ("limit", "1"),
            ("userId", "u1"),
            ("userId", "u2"),
            ("limit", "5"),
            ("sort", "asc"),
        ]));
        assert_eq!(params.user_id.as_deref(), Some("u1"));
        assert_eq!(params.limit.as_deref(), Some("1"));
    }

    #[test]
    fn missing_keys_stay_empty() {
        assert_eq!(
            RecommendationParams::from_pairs(Vec::new()),
            RecommendationParams::default()
        );
    }
}
