use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::WalletScan;
use crate::services::ScanStore;
use crate::AppState;

const DEFAULT_FEED_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct PublicScansQuery {
    pub limit: Option<i64>,
}

/// Recent scans flagged public, newest first. Backs the live scan feed.
pub async fn public_scans(
    State(state): State<AppState>,
    Query(params): Query<PublicScansQuery>,
) -> Result<Json<Vec<WalletScan>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_FEED_LIMIT).clamp(1, 200);
    let store = ScanStore::new(state.db_pool.clone());
    let scans = store.public_scans(limit).await?;
    Ok(Json(scans))
}

/// Full scan history for one wallet address, newest first.
pub async fn wallet_scans(
    State(state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Result<Json<Vec<WalletScan>>, AppError> {
    let store = ScanStore::new(state.db_pool.clone());
    let scans = store.scans_for_wallet(&wallet_address).await?;
    Ok(Json(scans))
}
