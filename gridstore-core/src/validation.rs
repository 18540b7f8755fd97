//! Boundary validation for identifiers and cell batches.
//!
//! Sheet ids and cell coordinates arrive as opaque integers. They are
//! checked against explicit domains here, before any storage access, so
//! out-of-range values never reach a query.

use thiserror::Error;

use crate::types::{CellWrite, SheetId};

/// Largest accepted sheet id.
pub const MAX_SHEET_ID: i64 = u32::MAX as i64;

/// Largest accepted row index (the classic 2^20 grid limit).
pub const MAX_ROW_INDEX: i64 = 1_048_575;

/// Largest accepted column index (the classic 2^14 grid limit).
pub const MAX_COL_INDEX: i64 = 16_383;

/// Largest accepted `saveCells` batch.
pub const MAX_BATCH_CELLS: usize = 10_000;

/// Client-input validation errors. All map to 4xx at the API boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cell batch is empty or missing")]
    EmptyBatch,

    #[error("cell batch has {len} cells, limit is {max}")]
    BatchTooLarge { len: usize, max: usize },

    #[error("{field} {value} is outside the valid range 0..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("cell batch mixes sheet {found} with sheet {expected}")]
    MixedSheetBatch { expected: SheetId, found: SheetId },
}

fn check_range(field: &'static str, value: i64, max: i64) -> Result<(), ValidationError> {
    if value < 0 || value > max {
        return Err(ValidationError::OutOfRange { field, value, max });
    }
    Ok(())
}

/// Validate a sheet id (also used for rename-target row ids, which share the
/// widest identifier domain).
pub fn validate_sheet_id(id: SheetId) -> Result<(), ValidationError> {
    check_range("sheet id", id, MAX_SHEET_ID)
}

/// Validate a `saveCells` batch and return the single sheet id it targets.
///
/// Checks, in order: non-empty, size cap, per-cell identifier ranges, and
/// that every cell carries the first cell's sheet id. A batch that mixes
/// sheets is rejected rather than silently bootstrapping only the first
/// sheet's columns.
pub fn validate_batch(cells: &[CellWrite]) -> Result<SheetId, ValidationError> {
    let first = cells.first().ok_or(ValidationError::EmptyBatch)?;
    if cells.len() > MAX_BATCH_CELLS {
        return Err(ValidationError::BatchTooLarge {
            len: cells.len(),
            max: MAX_BATCH_CELLS,
        });
    }

    let sheet_id = first.sheet_id;
    validate_sheet_id(sheet_id)?;

    for cell in cells {
        check_range("row index", cell.row_index, MAX_ROW_INDEX)?;
        check_range("column index", cell.col_index, MAX_COL_INDEX)?;
        if cell.sheet_id != sheet_id {
            return Err(ValidationError::MixedSheetBatch {
                expected: sheet_id,
                found: cell.sheet_id,
            });
        }
    }

    Ok(sheet_id)
}
