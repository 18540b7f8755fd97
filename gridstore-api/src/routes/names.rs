//! Name/Label Updater Route
//!
//! The one operation where user input chooses a storage target. The target
//! string is parsed into the closed `RenameTarget` enum before anything else
//! happens; an unlisted value is rejected 403 and logged for monitoring.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use gridstore_core::{validate_sheet_id, RenameTarget};

use crate::db::DbClient;
use crate::error::{ApiError, ApiResult};
use crate::types::UpdateNameRequest;

/// Shared state for rename routes.
#[derive(Clone)]
pub struct NameState {
    pub db: DbClient,
}

/// POST /api/updateName - Rename a sheet, column or row-group
#[utoipa::path(
    post,
    path = "/api/updateName",
    tag = "Names",
    request_body = UpdateNameRequest,
    responses(
        (status = 200, description = "Name updated (or no row matched the id)"),
        (status = 400, description = "Invalid id", body = ApiError),
        (status = 403, description = "Target not in the allow-list", body = ApiError),
        (status = 500, description = "Storage error", body = ApiError),
    ),
)]
pub async fn update_name(
    State(state): State<Arc<NameState>>,
    Json(req): Json<UpdateNameRequest>,
) -> ApiResult<impl IntoResponse> {
    let target = match req.table_name.parse::<RenameTarget>() {
        Ok(target) => target,
        Err(err) => {
            // Security-relevant rejection: keep the offending value in the log.
            tracing::warn!(
                table_name = %req.table_name,
                "rejected rename against unlisted target"
            );
            return Err(ApiError::forbidden(err.to_string()));
        }
    };
    validate_sheet_id(req.sheet_id)?;

    state
        .db
        .update_name(target, req.sheet_id, req.new_name.as_deref())
        .await?;
    Ok(StatusCode::OK)
}

pub fn create_router(db: DbClient) -> Router {
    let state = Arc::new(NameState { db });

    Router::new()
        .route("/updateName", post(update_name))
        .with_state(state)
}
