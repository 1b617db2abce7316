pub mod risk_scorer;
pub mod chain_data;
pub mod pricing;
pub mod scan_store;

pub use risk_scorer::WalletRiskScorer;
pub use chain_data::{ChainDataProvider, SolanaChainData};
pub use pricing::{FixedPriceOracle, PriceOracle};
pub use scan_store::ScanStore;
