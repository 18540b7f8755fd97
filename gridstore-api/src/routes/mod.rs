//! REST API Routes Module
//!
//! Route handlers organized by component:
//! - Cell store (read + batched write)
//! - Sheet allocator
//! - Sheet metadata aggregator
//! - Name/label updater
//! - Health check endpoints (Kubernetes-compatible)
//!
//! CORS support for browser-based clients is applied at the outermost layer.

pub mod cells;
pub mod health;
pub mod names;
pub mod shape;
pub mod sheets;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::db::DbClient;

// Re-export route creation functions for convenience
pub use cells::create_router as cells_router;
pub use health::create_router as health_router;
pub use names::create_router as names_router;
pub use shape::create_router as shape_router;
pub use sheets::create_router as sheets_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint.
#[cfg(feature = "openapi")]
async fn openapi_json() -> impl axum::response::IntoResponse {
    use utoipa::OpenApi;
    axum::Json(crate::openapi::ApiDoc::openapi())
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Build the complete application router.
///
/// # Layer Order (outer to inner)
/// 1. CORS (outermost) - handles preflight requests
/// 2. Request tracing
/// 3. Route handlers
pub fn create_api_router(db: DbClient, config: &ApiConfig) -> Router {
    let api = Router::new()
        .nest("/cells", cells::create_router(db.clone()))
        .nest("/sheets", sheets::create_router(db.clone()))
        .merge(names::create_router(db.clone()))
        .merge(shape::create_router(db.clone()));

    let router = Router::new()
        .nest("/api", api)
        // Health checks outside /api, no CORS restrictions needed but harmless
        .nest("/health", health::create_router(db));

    #[cfg(feature = "openapi")]
    let router = router.route("/openapi.json", axum::routing::get(openapi_json));

    router
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// With no configured origins, allows all origins (development mode). With
/// configured origins, only those are allowed.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: allowing all origins");
        cors.allow_origin(Any)
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS: restricting origins");
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
