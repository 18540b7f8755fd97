//! Gridstore API Server Entry Point
//!
//! Bootstraps configuration, the connection pool and the schema, then
//! starts the Axum HTTP server.

use gridstore_api::{
    create_api_router, resolve_bind_addr, ApiConfig, ApiError, ApiResult, DbClient, DbConfig,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing();

    let db_config = DbConfig::from_env();
    let db = DbClient::from_config(&db_config)?;
    db.init_schema().await?;

    let api_config = ApiConfig::from_env();
    let app = create_api_router(db, &api_config);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, pool_size = db_config.max_size, "starting gridstore API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRIDSTORE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
