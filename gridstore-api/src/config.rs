//! Service Configuration
//!
//! Database and API settings loaded from environment variables once at
//! process start, with development defaults. There is no hot reload.

use std::net::SocketAddr;

use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

use crate::error::{ApiError, ApiResult};

/// Default connection pool capacity, matching the source deployment.
const DEFAULT_POOL_SIZE: usize = 5;

// ============================================================================
// DATABASE CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size. The pool is the only backpressure mechanism:
    /// requests beyond this many concurrent storage calls wait for a slot.
    pub max_size: usize,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "gridstore".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            max_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("GRIDSTORE_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("GRIDSTORE_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("GRIDSTORE_DB_NAME")
                .unwrap_or_else(|_| "gridstore".to_string()),
            user: std::env::var("GRIDSTORE_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("GRIDSTORE_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("GRIDSTORE_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_POOL_SIZE),
        }
    }

    /// Create a connection pool from this configuration.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());
        cfg.pool = Some(PoolConfig::new(self.max_size));

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS and the listening socket.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            cors_max_age_secs: 86400, // 24 hours
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `GRIDSTORE_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `GRIDSTORE_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("GRIDSTORE_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("GRIDSTORE_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86400);

        Self {
            cors_origins,
            cors_max_age_secs,
        }
    }
}

/// Resolve the listening address from `GRIDSTORE_BIND` and `PORT`.
pub fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let host = std::env::var("GRIDSTORE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port_str = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("GRIDSTORE_PORT").ok())
        .unwrap_or_else(|| "3000".to_string());
    let port = port_str
        .parse::<u16>()
        .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port_str)))?;

    let addr = format!("{}:{}", host, port);
    addr.parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_config_defaults() {
        let config = DbConfig::default();
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_size, 5);
        assert_eq!(config.dbname, "gridstore");
    }

    #[test]
    fn test_api_config_defaults_allow_all_origins() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.cors_max_age_secs, 86400);
    }
}
