use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{CategoryBreakdown, CreateWalletScan, RiskTier};
use crate::services::{ScanStore, WalletRiskScorer};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanWalletRequest {
    pub wallet: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanWalletResponse {
    pub score: u32,
    pub risk_level: RiskTier,
    pub wallet_address: String,
    pub analysis: CategoryBreakdown,
    pub metadata: ScanMetadata,
    pub ai_summary: String,
    pub findings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub total_value_usd: f64,
    pub transaction_count: u32,
    pub wallet_age_days: u32,
    pub token_count: u32,
    /// NFT enumeration is not implemented; always 0.
    pub nft_count: u32,
}

pub async fn scan_wallet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ScanWalletRequest>,
) -> Result<Json<ScanWalletResponse>, AppError> {
    let wallet = request
        .wallet
        .filter(|w| !w.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError("Wallet address is required".to_string()))?;

    info!("Scanning wallet {}", wallet);

    let observables = state.chain.fetch_wallet_data(&wallet).await?;
    let assessment = WalletRiskScorer::new().score(&observables)?;

    let metadata = ScanMetadata {
        total_value_usd: observables.balance_sol * state.prices.sol_price_usd(),
        transaction_count: observables.transaction_count,
        wallet_age_days: observables.account_age_days,
        token_count: observables.token_count,
        nft_count: 0,
    };

    let scan_ip = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let record = CreateWalletScan {
        wallet_address: wallet.clone(),
        risk_score: assessment.total_score as i32,
        risk_level: assessment.risk_tier.to_string(),
        transaction_count: observables.transaction_count as i32,
        wallet_age_days: observables.account_age_days as i32,
        token_diversity: observables.token_count as i32,
        total_value_usd: metadata.total_value_usd,
        ai_summary: assessment.summary.clone(),
        ai_findings: json!(assessment.findings),
        metadata: serde_json::to_value(&metadata)?,
        is_public: request.is_public,
        scan_ip: Some(scan_ip),
    };

    // Persistence never changes the response; the assessment is authoritative.
    let store = ScanStore::new(state.db_pool.clone());
    if let Err(e) = store.record_scan(&record).await {
        warn!("Failed to persist wallet scan: {}", e);
    }

    Ok(Json(ScanWalletResponse {
        score: assessment.total_score,
        risk_level: assessment.risk_tier,
        wallet_address: wallet,
        analysis: assessment.categories,
        metadata,
        ai_summary: assessment.summary,
        findings: assessment.findings,
    }))
}
