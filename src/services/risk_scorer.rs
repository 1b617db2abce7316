use crate::error::AppError;
use crate::models::{CategoryBreakdown, CategoryScore, RiskAssessment, RiskTier, WalletObservables};

pub const TRANSACTION_HISTORY_WEIGHT: u32 = 30;
pub const WALLET_AGE_WEIGHT: u32 = 20;
pub const TOKEN_DIVERSITY_WEIGHT: u32 = 15;
pub const ACTIVITY_PATTERNS_WEIGHT: u32 = 15;
pub const PROTOCOL_INTERACTIONS_WEIGHT: u32 = 10;
pub const BALANCE_HEALTH_WEIGHT: u32 = 10;

// Threshold ladders: (exclusive lower bound, score), evaluated top-down,
// first match wins. Values at or below every bound fall to the floor score.
const TRANSACTION_HISTORY_BANDS: [(u32, u32); 3] = [(500, 30), (100, 25), (20, 20)];
const TRANSACTION_HISTORY_FLOOR: u32 = 10;

const WALLET_AGE_BANDS: [(u32, u32); 3] = [(365, 20), (180, 16), (90, 12)];
const WALLET_AGE_FLOOR: u32 = 8;

const TOKEN_DIVERSITY_BANDS: [(u32, u32); 3] = [(10, 15), (5, 12), (2, 9)];
const TOKEN_DIVERSITY_FLOOR: u32 = 5;

const BALANCE_HEALTH_BANDS: [(f64, u32); 3] = [(10.0, 10), (1.0, 8), (0.1, 6)];
const BALANCE_HEALTH_FLOOR: u32 = 3;

fn ladder_score(value: u32, bands: &[(u32, u32)], floor: u32) -> u32 {
    bands
        .iter()
        .find(|(bound, _)| value > *bound)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}

fn balance_ladder_score(value: f64, bands: &[(f64, u32)], floor: u32) -> u32 {
    bands
        .iter()
        .find(|(bound, _)| value > *bound)
        .map(|(_, score)| *score)
        .unwrap_or(floor)
}

/// Deterministic wallet risk scorer. Pure computation over one snapshot of
/// observables: no I/O, no shared state, safe to call concurrently.
pub struct WalletRiskScorer;

impl WalletRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, observables: &WalletObservables) -> Result<RiskAssessment, AppError> {
        if !observables.balance_sol.is_finite() || observables.balance_sol < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "balance_sol must be finite and non-negative, got {}",
                observables.balance_sol
            )));
        }

        let categories = self.score_categories(observables);
        let total_score = categories.total();
        let risk_tier = RiskTier::from_score(total_score);
        let findings = self.generate_findings(observables, total_score);
        let summary = self.generate_summary(observables, risk_tier);

        Ok(RiskAssessment {
            total_score,
            risk_tier,
            categories,
            findings,
            summary,
        })
    }

    fn score_categories(&self, observables: &WalletObservables) -> CategoryBreakdown {
        let transaction_history = ladder_score(
            observables.transaction_count,
            &TRANSACTION_HISTORY_BANDS,
            TRANSACTION_HISTORY_FLOOR,
        );
        let wallet_age = ladder_score(
            observables.account_age_days,
            &WALLET_AGE_BANDS,
            WALLET_AGE_FLOOR,
        );
        let token_diversity = ladder_score(
            observables.token_count,
            &TOKEN_DIVERSITY_BANDS,
            TOKEN_DIVERSITY_FLOOR,
        );
        let activity_patterns =
            std::cmp::min(ACTIVITY_PATTERNS_WEIGHT, observables.transaction_count / 50);
        let protocol_interactions =
            std::cmp::min(PROTOCOL_INTERACTIONS_WEIGHT, observables.token_count / 2);
        let balance_health = balance_ladder_score(
            observables.balance_sol,
            &BALANCE_HEALTH_BANDS,
            BALANCE_HEALTH_FLOOR,
        );

        CategoryBreakdown {
            transaction_history: CategoryScore::new(transaction_history, TRANSACTION_HISTORY_WEIGHT),
            wallet_age: CategoryScore::new(wallet_age, WALLET_AGE_WEIGHT),
            token_diversity: CategoryScore::new(token_diversity, TOKEN_DIVERSITY_WEIGHT),
            activity_patterns: CategoryScore::new(activity_patterns, ACTIVITY_PATTERNS_WEIGHT),
            protocol_interactions: CategoryScore::new(protocol_interactions, PROTOCOL_INTERACTIONS_WEIGHT),
            balance_health: CategoryScore::new(balance_health, BALANCE_HEALTH_WEIGHT),
        }
    }

    /// Four ordered rules, each contributing at most one finding. A rule
    /// whose value falls between its two branches contributes nothing.
    fn generate_findings(&self, observables: &WalletObservables, total_score: u32) -> Vec<String> {
        let mut findings = Vec::new();

        if observables.transaction_count > 100 {
            findings.push("Regular transaction activity detected".to_string());
        } else if observables.transaction_count < 10 {
            findings.push("Limited transaction history".to_string());
        }

        if observables.account_age_days > 180 {
            findings.push("Established wallet with long history".to_string());
        } else if observables.account_age_days < 30 {
            findings.push("Recently created wallet".to_string());
        }

        if observables.token_count > 5 {
            findings.push("Diversified token holdings".to_string());
        } else if observables.token_count == 0 {
            findings.push("No token holdings detected".to_string());
        }

        if total_score >= 75 {
            findings.push("No high-risk patterns detected".to_string());
        } else if total_score < 50 {
            findings.push("Multiple risk indicators present".to_string());
        }

        findings
    }

    // Balance uses `{:.4}`, which rounds ties to even in the decimal
    // representation; display surfaces depend on this exact sentence.
    fn generate_summary(&self, observables: &WalletObservables, risk_tier: RiskTier) -> String {
        format!(
            "This wallet has {} transactions over {} days with a balance of {:.4} SOL. Risk assessment: {}.",
            observables.transaction_count,
            observables.account_age_days,
            observables.balance_sol,
            risk_tier
        )
    }
}

impl Default for WalletRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
