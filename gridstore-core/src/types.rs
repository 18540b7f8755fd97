//! Entity types for the sparse cell store.
//!
//! A sheet is a container of cells addressed by (row, column). Sheets and
//! columns are materialized lazily: the first cell batch that references them
//! creates them. Nothing here talks to storage; these are the shapes that
//! flow between the API layer and the database client.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sheet identifier. Assigned by the client, bootstrapped via the allocator.
pub type SheetId = i64;

/// Row index within a sheet.
pub type RowId = i64;

/// Column index within a sheet. Column records reuse the index as their id.
pub type ColId = i64;

/// A stored cell, keyed by (sheet, row, column).
///
/// `value` is `None` when the stored cell holds SQL NULL. An empty string is
/// a distinct, valid value and still counts as an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub sheet_id: SheetId,
    pub row_id: RowId,
    pub col_id: ColId,
    pub value: Option<String>,
}

impl CellRecord {
    /// The wire identifier for a cell: `"<sheet>-<row>-<col>"`.
    ///
    /// Identifiers are validated non-negative at the boundary, so the dashes
    /// are unambiguous separators.
    pub fn qualified_id(&self) -> String {
        format!("{}-{}-{}", self.sheet_id, self.row_id, self.col_id)
    }
}

/// One cell edit inside a `saveCells` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CellWrite {
    pub sheet_id: SheetId,
    pub row_index: RowId,
    pub col_index: ColId,
    /// New cell content. `None` or `""` clears the cell without deleting it.
    pub content: Option<String>,
}

/// A column as reported in a sheet shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ColumnDescriptor {
    pub id: ColId,
    pub name: Option<String>,
}

/// Computed summary of a sheet: enough to render a grid without loading
/// every cell. Never persisted.
///
/// `row_count` is the maximum, across the sheet's columns, of the number of
/// distinct occupied rows in that column. Sparsely populated sheets are
/// undercounted; callers render at least this many rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SheetShape {
    pub id: SheetId,
    pub name: Option<String>,
    pub cols: Vec<ColumnDescriptor>,
    pub row_count: i64,
}

/// Distinct column indices referenced by a batch, first occurrence first.
///
/// The write path creates one column record per returned index before the
/// cell upserts, so every stored cell has a corresponding column record.
pub fn distinct_columns(cells: &[CellWrite]) -> Vec<ColId> {
    let mut seen = HashSet::new();
    cells
        .iter()
        .filter(|cell| seen.insert(cell.col_index))
        .map(|cell| cell.col_index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(col_index: ColId) -> CellWrite {
        CellWrite {
            sheet_id: 1,
            row_index: 0,
            col_index,
            content: Some("x".to_string()),
        }
    }

    #[test]
    fn test_qualified_id_format() {
        let cell = CellRecord {
            sheet_id: 3,
            row_id: 14,
            col_id: 2,
            value: Some("hello".to_string()),
        };
        assert_eq!(cell.qualified_id(), "3-14-2");
    }

    #[test]
    fn test_distinct_columns_first_occurrence_wins() {
        let batch = vec![write(3), write(0), write(3), write(7), write(0)];
        assert_eq!(distinct_columns(&batch), vec![3, 0, 7]);
    }

    #[test]
    fn test_distinct_columns_empty_batch() {
        assert!(distinct_columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_write_deserializes_null_content() -> Result<(), serde_json::Error> {
        let json = r#"{"sheet_id":1,"row_index":2,"col_index":3,"content":null}"#;
        let cell: CellWrite = serde_json::from_str(json)?;
        assert_eq!(cell.content, None);

        let json = r#"{"sheet_id":1,"row_index":2,"col_index":3,"content":""}"#;
        let cell: CellWrite = serde_json::from_str(json)?;
        assert_eq!(cell.content, Some(String::new()));
        Ok(())
    }
}
