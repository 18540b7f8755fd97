//! Cell Store Routes
//!
//! Read and batched write of sparse cells. Validation happens here, before
//! any storage access; the batched write itself is atomic inside DbClient.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use gridstore_core::{validate_sheet_id, SheetId};

use crate::db::DbClient;
use crate::error::{ApiError, ApiResult};
use crate::types::{CellEntry, SaveCellsRequest};

/// Shared state for cell routes.
#[derive(Clone)]
pub struct CellState {
    pub db: DbClient,
}

/// GET /api/cells/{sheetId} - Every stored cell of a sheet
#[utoipa::path(
    get,
    path = "/api/cells/{sheet_id}",
    tag = "Cells",
    params(
        ("sheet_id" = i64, Path, description = "Sheet identifier"),
    ),
    responses(
        (status = 200, description = "Cells of the sheet, unordered", body = Vec<CellEntry>),
        (status = 400, description = "Invalid sheet id", body = ApiError),
        (status = 500, description = "Storage error", body = ApiError),
    ),
)]
pub async fn fetch_cells(
    State(state): State<Arc<CellState>>,
    Path(sheet_id): Path<SheetId>,
) -> ApiResult<impl IntoResponse> {
    validate_sheet_id(sheet_id)?;

    let records = state.db.fetch_cells(sheet_id).await?;
    let cells: Vec<CellEntry> = records.iter().map(CellEntry::from).collect();
    Ok(Json(cells))
}

/// POST /api/cells/saveCells - Atomically merge one batch of cell edits
#[utoipa::path(
    post,
    path = "/api/cells/saveCells",
    tag = "Cells",
    request_body = SaveCellsRequest,
    responses(
        (status = 200, description = "Batch applied"),
        (status = 400, description = "Empty, mixed-sheet or out-of-range batch", body = ApiError),
        (status = 500, description = "Storage error, nothing applied", body = ApiError),
    ),
)]
pub async fn save_cells(
    State(state): State<Arc<CellState>>,
    Json(req): Json<SaveCellsRequest>,
) -> ApiResult<impl IntoResponse> {
    let cells = req.cells.unwrap_or_default();
    let sheet_id = gridstore_core::validate_batch(&cells)?;

    state.db.save_cells(sheet_id, &cells).await?;
    Ok(StatusCode::OK)
}

pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(CellState { db });

    Router::new()
        .route("/saveCells", post(save_cells))
        .route("/:sheet_id", get(fetch_cells))
        .with_state(state)
}
