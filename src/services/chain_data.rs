use crate::config::Settings;
use crate::error::AppError;
use crate::models::WalletObservables;
use async_trait::async_trait;
use chrono::Utc;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use tracing::{debug, error};

const SPL_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Retrieves the raw observables for a wallet address. Injected into the
/// application state so handlers can be tested against a stub.
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    async fn fetch_wallet_data(&self, wallet: &str) -> Result<WalletObservables, AppError>;
}

/// Solana JSON-RPC implementation backed by the nonblocking client.
pub struct SolanaChainData {
    rpc_client: RpcClient,
    signature_fetch_limit: usize,
}

impl SolanaChainData {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rpc_client: RpcClient::new(settings.solana.rpc_url.clone()),
            signature_fetch_limit: settings.solana.signature_fetch_limit,
        }
    }
}

#[async_trait]
impl ChainDataProvider for SolanaChainData {
    async fn fetch_wallet_data(&self, wallet: &str) -> Result<WalletObservables, AppError> {
        let pubkey = Pubkey::from_str(wallet)
            .map_err(|_| AppError::ValidationError("Invalid wallet address".to_string()))?;

        let balance_lamports = self.rpc_client.get_balance(&pubkey).await.map_err(|e| {
            error!("Error fetching wallet balance: {}", e);
            AppError::ChainError("Failed to fetch wallet data".to_string())
        })?;
        let balance_sol = balance_lamports as f64 / LAMPORTS_PER_SOL as f64;

        let signatures = self
            .rpc_client
            .get_signatures_for_address_with_config(
                &pubkey,
                GetConfirmedSignaturesForAddress2Config {
                    limit: Some(self.signature_fetch_limit),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| {
                error!("Error fetching wallet signatures: {}", e);
                AppError::ChainError("Failed to fetch wallet data".to_string())
            })?;
        let transaction_count = signatures.len() as u32;

        // Signatures come back newest first; the last one is the earliest
        // observed transaction.
        let account_age_days = signatures
            .last()
            .and_then(|oldest| oldest.block_time)
            .map(|creation_time| {
                let elapsed = Utc::now().timestamp() - creation_time;
                (elapsed.max(0) / SECONDS_PER_DAY) as u32
            })
            .unwrap_or(0);

        let token_accounts = self
            .rpc_client
            .get_token_accounts_by_owner(&pubkey, TokenAccountsFilter::ProgramId(SPL_TOKEN_PROGRAM_ID))
            .await
            .map_err(|e| {
                error!("Error fetching token accounts: {}", e);
                AppError::ChainError("Failed to fetch wallet data".to_string())
            })?;
        let token_count = token_accounts.len() as u32;

        debug!(
            wallet,
            balance_sol, transaction_count, account_age_days, token_count,
            "Fetched wallet observables"
        );

        Ok(WalletObservables {
            balance_sol,
            transaction_count,
            account_age_days,
            token_count,
        })
    }
}
