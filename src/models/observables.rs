use serde::{Deserialize, Serialize};

/// Raw on-chain facts about a wallet, captured once per scan at the
/// chain-data boundary. Counts are unsigned by construction; only the
/// balance needs runtime validation before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletObservables {
    /// Native balance in SOL.
    pub balance_sol: f64,
    /// Number of historical signatures observed, capped by the fetch limit.
    pub transaction_count: u32,
    /// Days since the earliest observed transaction; 0 when the wallet has
    /// no transaction history.
    pub account_age_days: u32,
    /// Distinct fungible-token accounts held, including zero balances.
    pub token_count: u32,
}
