use wallet_risk_monitor::{
    build_router,
    config::Settings,
    database::connection::{establish_connection, test_connection},
    services::{FixedPriceOracle, SolanaChainData},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Wallet Risk Monitor");

    // Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded successfully");

    // Establish database connection
    let db_pool = establish_connection(&settings.database).await?;
    test_connection(&db_pool).await?;

    // Apply pending migrations
    sqlx::migrate!().run(&db_pool).await?;
    info!("Database migrations applied");

    // Wire up collaborators
    let chain = Arc::new(SolanaChainData::new(&settings));
    let prices = Arc::new(FixedPriceOracle::new(settings.pricing.sol_price_usd));

    let state = AppState {
        settings: settings.clone(),
        db_pool,
        chain,
        prices,
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.api.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server running on {}:{}", settings.api.host, settings.api.port);
    info!("API endpoints available at:");
    info!("  POST   /api/v1/scan-wallet - Score a wallet address");
    info!("  GET    /api/v1/scans/public - Recent public scans");
    info!("  GET    /api/v1/scans/{{wallet}} - Scan history for a wallet");
    info!("  GET    /health - Service health");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    tokio::select! {
        _ = server_handle => {
            error!("Web server stopped unexpectedly");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down Wallet Risk Monitor");
    Ok(())
}
