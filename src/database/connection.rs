use sqlx::{PgPool, postgres::PgPoolOptions};
use crate::config::settings::DatabaseSettings;
use crate::error::AppError;
use tracing::{info, error};
use std::time::Duration;

pub async fn establish_connection(settings: &DatabaseSettings) -> Result<PgPool, AppError> {
    info!(
        "Establishing database connection (max_connections={})",
        settings.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_seconds))
        .connect(&settings.url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            AppError::DatabaseError(format!("Connection failed: {}", e))
        })?;

    info!("Database connection established successfully");
    Ok(pool)
}

/// Round-trip check run at startup so a misconfigured DATABASE_URL fails
/// fast instead of on the first scan insert.
pub async fn test_connection(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Connection test failed: {}", e)))?;

    info!("Database connection test successful");
    Ok(())
}
