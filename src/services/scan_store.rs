use crate::error::AppError;
use crate::models::{CreateWalletScan, WalletScan};
use sqlx::PgPool;
use tracing::info;

/// Persistence for scan records. Inserts are fire-and-forget from the
/// caller's perspective: the scoring result is authoritative whether or not
/// the row lands.
pub struct ScanStore {
    pool: PgPool,
}

impl ScanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record_scan(&self, scan: &CreateWalletScan) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO wallet_scans (
                wallet_address, risk_score, risk_level, transaction_count,
                wallet_age_days, token_diversity, total_value_usd, ai_summary,
                ai_findings, metadata, is_public, scan_ip
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&scan.wallet_address)
        .bind(scan.risk_score)
        .bind(&scan.risk_level)
        .bind(scan.transaction_count)
        .bind(scan.wallet_age_days)
        .bind(scan.token_diversity)
        .bind(scan.total_value_usd)
        .bind(&scan.ai_summary)
        .bind(&scan.ai_findings)
        .bind(&scan.metadata)
        .bind(scan.is_public)
        .bind(&scan.scan_ip)
        .execute(&self.pool)
        .await?;

        info!("Recorded scan for wallet {}", scan.wallet_address);
        Ok(())
    }

    pub async fn public_scans(&self, limit: i64) -> Result<Vec<WalletScan>, AppError> {
        let scans = sqlx::query_as::<_, WalletScan>(
            r#"
            SELECT id, wallet_address, risk_score, risk_level, transaction_count,
                   wallet_age_days, token_diversity, total_value_usd, ai_summary,
                   ai_findings, metadata, is_public, scan_ip, created_at
            FROM wallet_scans
            WHERE is_public = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(scans)
    }

    pub async fn scans_for_wallet(&self, wallet_address: &str) -> Result<Vec<WalletScan>, AppError> {
        let scans = sqlx::query_as::<_, WalletScan>(
            r#"
            SELECT id, wallet_address, risk_score, risk_level, transaction_count,
                   wallet_age_days, token_diversity, total_value_usd, ai_summary,
                   ai_findings, metadata, is_public, scan_ip, created_at
            FROM wallet_scans
            WHERE wallet_address = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(wallet_address)
        .fetch_all(&self.pool)
        .await?;

        Ok(scans)
    }
}
