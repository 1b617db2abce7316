pub mod health;
pub mod scan;
pub mod scans;

use axum::{
    routing::{get, post},
    Router,
};

pub use health::health_check;
pub use scan::{scan_wallet, ScanMetadata, ScanWalletRequest, ScanWalletResponse};
pub use scans::{public_scans, wallet_scans, PublicScansQuery};

use crate::AppState;

pub fn create_scan_routes() -> Router<AppState> {
    Router::new()
        .route("/scan-wallet", post(scan_wallet))
        .route("/scans/public", get(public_scans))
        .route("/scans/:wallet_address", get(wallet_scans))
}
