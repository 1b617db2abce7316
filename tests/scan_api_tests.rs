use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use wallet_risk_monitor::config::Settings;
use wallet_risk_monitor::error::AppError;
use wallet_risk_monitor::models::WalletObservables;
use wallet_risk_monitor::services::{ChainDataProvider, FixedPriceOracle};
use wallet_risk_monitor::{build_router, AppState};

struct StubChainData {
    observables: WalletObservables,
}

#[async_trait]
impl ChainDataProvider for StubChainData {
    async fn fetch_wallet_data(&self, _wallet: &str) -> Result<WalletObservables, AppError> {
        Ok(self.observables)
    }
}

struct FailingChainData;

#[async_trait]
impl ChainDataProvider for FailingChainData {
    async fn fetch_wallet_data(&self, _wallet: &str) -> Result<WalletObservables, AppError> {
        Err(AppError::ChainError("Failed to fetch wallet data".to_string()))
    }
}

// Lazy pool: never connects unless a query runs, and scan persistence
// failures are swallowed, so the scan endpoint works without a database.
fn test_state(chain: Arc<dyn ChainDataProvider>) -> AppState {
    let settings = Settings::default();
    let db_pool = PgPoolOptions::new()
        .connect_lazy(&settings.database.url)
        .expect("lazy pool");
    AppState {
        settings,
        db_pool,
        chain,
        prices: Arc::new(FixedPriceOracle::default()),
    }
}

fn scan_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/scan-wallet")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_wallet_returns_400() {
    let app = build_router(test_state(Arc::new(FailingChainData)));

    let response = app.oneshot(scan_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Wallet address is required");
}

#[tokio::test]
async fn test_empty_wallet_returns_400() {
    let app = build_router(test_state(Arc::new(FailingChainData)));

    let response = app
        .oneshot(scan_request(r#"{"wallet": "  "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chain_failure_returns_500_with_message() {
    let app = build_router(test_state(Arc::new(FailingChainData)));

    let response = app
        .oneshot(scan_request(r#"{"wallet": "SomeWalletAddress"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch wallet data");
}

#[tokio::test]
async fn test_scan_response_shape() {
    let chain = Arc::new(StubChainData {
        observables: WalletObservables {
            balance_sol: 47.93,
            transaction_count: 89,
            account_age_days: 120,
            token_count: 3,
        },
    });
    let app = build_router(test_state(chain));

    let response = app
        .oneshot(scan_request(r#"{"wallet": "SomeWalletAddress", "is_public": true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 53);
    assert_eq!(body["risk_level"], "MEDIUM");
    assert_eq!(body["wallet_address"], "SomeWalletAddress");

    assert_eq!(body["analysis"]["transaction_history"]["score"], 20);
    assert_eq!(body["analysis"]["transaction_history"]["weight"], 30);
    assert_eq!(body["analysis"]["wallet_age"]["score"], 12);
    assert_eq!(body["analysis"]["token_diversity"]["score"], 9);
    assert_eq!(body["analysis"]["activity_patterns"]["score"], 1);
    assert_eq!(body["analysis"]["protocol_interactions"]["score"], 1);
    assert_eq!(body["analysis"]["balance_health"]["score"], 10);

    // 47.93 SOL at the fixed 150 USD rate.
    assert!((body["metadata"]["total_value_usd"].as_f64().unwrap() - 7189.5).abs() < 1e-9);
    assert_eq!(body["metadata"]["transaction_count"], 89);
    assert_eq!(body["metadata"]["wallet_age_days"], 120);
    assert_eq!(body["metadata"]["token_count"], 3);
    assert_eq!(body["metadata"]["nft_count"], 0);

    assert_eq!(
        body["ai_summary"],
        "This wallet has 89 transactions over 120 days with a balance of 47.9300 SOL. Risk assessment: MEDIUM."
    );
    assert_eq!(
        body["findings"],
        serde_json::json!(["Established wallet with long history"])
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router(test_state(Arc::new(FailingChainData)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "wallet-risk-monitor");
}
