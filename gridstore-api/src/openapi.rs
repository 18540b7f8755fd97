//! OpenAPI Documentation
//!
//! Aggregates the route annotations and wire schemas into one spec served
//! at `/openapi.json`.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::health::{ComponentHealth, HealthResponse, HealthStatus};
use crate::types::{CellEntry, SaveCellsRequest, UpdateNameRequest};
use gridstore_core::{CellWrite, ColumnDescriptor, SheetShape};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gridstore API",
        description = "Sparse spreadsheet cell store: batched cell upserts, \
                       implicit sheet/column discovery, shape reconstruction."
    ),
    paths(
        crate::routes::cells::fetch_cells,
        crate::routes::cells::save_cells,
        crate::routes::sheets::latest_sheet_id,
        crate::routes::names::update_name,
        crate::routes::shape::sheet_shapes,
        crate::routes::health::ping,
        crate::routes::health::liveness,
        crate::routes::health::readiness,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        SaveCellsRequest,
        CellEntry,
        UpdateNameRequest,
        CellWrite,
        ColumnDescriptor,
        SheetShape,
        HealthResponse,
        HealthStatus,
        ComponentHealth,
    )),
    tags(
        (name = "Cells", description = "Sparse cell read and batched atomic write"),
        (name = "Sheets", description = "Sheet allocator and shape aggregation"),
        (name = "Names", description = "Allow-listed rename operations"),
        (name = "Health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_all_operations() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();

        for expected in [
            "/api/cells/{sheet_id}",
            "/api/cells/saveCells",
            "/api/sheets/latestId",
            "/api/updateName",
            "/api/db",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}, have {paths:?}",
            );
        }
    }
}
