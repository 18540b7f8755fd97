//! Sheet Allocator Route
//!
//! Advisory next-identifier generation for new sheets.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::db::DbClient;
use crate::error::{ApiError, ApiResult};

/// Shared state for sheet routes.
#[derive(Clone)]
pub struct SheetState {
    pub db: DbClient,
}

/// GET /api/sheets/latestId - Next available sheet identifier
///
/// Plain integer body: one greater than the current maximum sheet id, 0 when
/// no sheets exist. Not a reservation; concurrent callers may receive the
/// same value and rely on the idempotent sheet bootstrap.
#[utoipa::path(
    get,
    path = "/api/sheets/latestId",
    tag = "Sheets",
    responses(
        (status = 200, description = "Next available sheet id", body = i64),
        (status = 500, description = "Storage error", body = ApiError),
    ),
)]
pub async fn latest_sheet_id(
    State(state): State<Arc<SheetState>>,
) -> ApiResult<impl IntoResponse> {
    let next_id = state.db.next_sheet_id().await?;
    Ok(Json(next_id))
}

pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(SheetState { db });

    Router::new()
        .route("/latestId", get(latest_sheet_id))
        .with_state(state)
}
