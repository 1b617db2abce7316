pub mod config;
pub mod models;
pub mod services;
pub mod handlers;
pub mod database;
pub mod error;

pub use error::types::*;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::services::{ChainDataProvider, PriceOracle};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub db_pool: sqlx::PgPool,
    pub chain: Arc<dyn ChainDataProvider>,
    pub prices: Arc<dyn PriceOracle>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", handlers::create_scan_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
