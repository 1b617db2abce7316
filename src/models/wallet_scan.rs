use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted scan record, one row per scoring call. `is_public` controls
/// whether the row shows up on the public feed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WalletScan {
    pub id: Uuid,
    pub wallet_address: String,
    pub risk_score: i32,
    pub risk_level: String,
    pub transaction_count: i32,
    pub wallet_age_days: i32,
    pub token_diversity: i32,
    pub total_value_usd: f64,
    pub ai_summary: String,
    pub ai_findings: serde_json::Value,
    pub metadata: serde_json::Value,
    pub is_public: bool,
    pub scan_ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWalletScan {
    pub wallet_address: String,
    pub risk_score: i32,
    pub risk_level: String,
    pub transaction_count: i32,
    pub wallet_age_days: i32,
    pub token_diversity: i32,
    pub total_value_usd: f64,
    pub ai_summary: String,
    pub ai_findings: serde_json::Value,
    pub metadata: serde_json::Value,
    pub is_public: bool,
    pub scan_ip: Option<String>,
}
