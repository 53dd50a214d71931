use crate::models::{FraudAnalysis, Transaction};
use async_trait::async_trait;

/// Scores a single transaction. Implementations must be cheap to share
/// between concurrent requests.
#[async_trait]
pub trait FraudScorer: Send + Sync {
    async fn analyze(&self, transaction: &Transaction) -> anyhow::Result<FraudAnalysis>;
}

/// Placeholder scorer: flags every transaction with the same fixed score.
#[derive(Debug, Clone)]
pub struct StaticFraudScorer {
    pub risk_score: f64,
    pub is_fraudulent: bool,
}

impl Default for StaticFraudScorer {
    fn default() -> Self {
        Self {
            risk_score: 0.85,
            is_fraudulent: true,
        }
    }
}

#[async_trait]
impl FraudScorer for StaticFraudScorer {
    async fn analyze(&self, _transaction: &Transaction) -> anyhow::Result<FraudAnalysis> {
        Ok(FraudAnalysis {
            risk_score: self.risk_score,
            is_fraudulent: self.is_fraudulent,
        })
    }
}
