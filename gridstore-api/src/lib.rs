//! Gridstore API - REST Layer for the Sparse Cell Store
//!
//! This crate exposes the cell store over Axum REST endpoints backed by a
//! bounded PostgreSQL connection pool: batched atomic cell writes with
//! implicit sheet/column discovery, sheet shape reconstruction, advisory
//! sheet id allocation, and allow-listed renames.

pub mod config;
pub mod db;
pub mod error;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use config::{resolve_bind_addr, ApiConfig, DbConfig};
pub use db::DbClient;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_api_router;
pub use types::{CellEntry, SaveCellsRequest, UpdateNameRequest};
