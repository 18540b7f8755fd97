//! Sheet Metadata Aggregator Route
//!
//! Serves the reconstructed view of every sheet (columns + occupied-row
//! count) so a client can render grids without loading cells.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::db::DbClient;
use crate::error::{ApiError, ApiResult};

/// Shared state for shape routes.
#[derive(Clone)]
pub struct ShapeState {
    pub db: DbClient,
}

/// GET /api/db - Shape of every sheet with at least one column
#[utoipa::path(
    get,
    path = "/api/db",
    tag = "Sheets",
    responses(
        (status = 200, description = "Sheet shapes keyed by sheet id"),
        (status = 500, description = "Storage error", body = ApiError),
    ),
)]
pub async fn sheet_shapes(State(state): State<Arc<ShapeState>>) -> ApiResult<impl IntoResponse> {
    let shapes = state.db.sheet_shapes().await?;
    Ok(Json(shapes))
}

pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(ShapeState { db });

    Router::new()
        .route("/db", get(sheet_shapes))
        .with_state(state)
}
