use std::fmt;
use serde::{Deserialize, Serialize};

/// One weighted sub-score. `score` is always within `[0, weight]` and drawn
/// from a small discrete set per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u32,
    pub weight: u32,
}

impl CategoryScore {
    pub fn new(score: u32, weight: u32) -> Self {
        Self { score, weight }
    }
}

/// The six scoring categories, in evaluation order. Field order doubles as
/// JSON key order so serialized breakdowns are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub transaction_history: CategoryScore,
    pub wallet_age: CategoryScore,
    pub token_diversity: CategoryScore,
    pub activity_patterns: CategoryScore,
    pub protocol_interactions: CategoryScore,
    pub balance_health: CategoryScore,
}

impl CategoryBreakdown {
    pub fn total(&self) -> u32 {
        self.transaction_history.score
            + self.wallet_age.score
            + self.token_diversity.score
            + self.activity_patterns.score
            + self.protocol_interactions.score
            + self.balance_health.score
    }

    /// Categories as `(name, score)` pairs in evaluation order.
    pub fn entries(&self) -> [(&'static str, CategoryScore); 6] {
        [
            ("transaction_history", self.transaction_history),
            ("wallet_age", self.wallet_age),
            ("token_diversity", self.token_diversity),
            ("activity_patterns", self.activity_patterns),
            ("protocol_interactions", self.protocol_interactions),
            ("balance_health", self.balance_health),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Tier is a total function of the composite score: scores below 50 are
    /// HIGH risk, below 75 MEDIUM, and 75 or above LOW.
    pub fn from_score(total_score: u32) -> Self {
        if total_score < 50 {
            RiskTier::High
        } else if total_score < 75 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one wallet. Immutable once constructed; identical
/// observables always produce an identical assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub total_score: u32,
    pub risk_tier: RiskTier,
    pub categories: CategoryBreakdown,
    pub findings: Vec<String>,
    pub summary: String,
}
