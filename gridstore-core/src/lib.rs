//! Gridstore Core - Cell Store Types
//!
//! Pure data structures and pure functions with no I/O. All other crates
//! depend on this. Business logic that needs a database lives in
//! `gridstore-api`; everything here is unit testable in isolation.

pub mod rename;
pub mod shape;
pub mod types;
pub mod validation;

pub use rename::{RenameTarget, UnknownRenameTarget};
pub use shape::{merge_shapes, SheetColumnRow};
pub use types::{
    distinct_columns, CellRecord, CellWrite, ColId, ColumnDescriptor, RowId, SheetId, SheetShape,
};
pub use validation::{
    validate_batch, validate_sheet_id, ValidationError, MAX_BATCH_CELLS, MAX_COL_INDEX,
    MAX_ROW_INDEX, MAX_SHEET_ID,
};
