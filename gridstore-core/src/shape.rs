//! Sheet shape reconstruction.
//!
//! The aggregator runs two separate queries: a sheet-column join and a
//! per-sheet max of per-column distinct row counts. Folding one into the
//! other with a single mixed group-by would conflate columns, so they stay
//! apart and are merged here, in memory.

use std::collections::{BTreeMap, HashMap};

use crate::types::{ColId, ColumnDescriptor, SheetId, SheetShape};

/// One row of the sheet-column join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetColumnRow {
    pub sheet_id: SheetId,
    pub sheet_name: Option<String>,
    pub column_id: ColId,
    pub column_name: Option<String>,
}

/// Merge the join rows and the per-sheet row counts into sheet shapes.
///
/// A shape is initialized on the first join row seen for its sheet and
/// accumulates one column descriptor per join row. Sheets with zero columns
/// never appear in the join and are absent from the result; a sheet whose
/// columns hold no cells gets `row_count` 0.
pub fn merge_shapes(
    rows: Vec<SheetColumnRow>,
    counts: &HashMap<SheetId, i64>,
) -> BTreeMap<SheetId, SheetShape> {
    let mut shapes: BTreeMap<SheetId, SheetShape> = BTreeMap::new();

    for row in rows {
        let shape = shapes.entry(row.sheet_id).or_insert_with(|| SheetShape {
            id: row.sheet_id,
            name: row.sheet_name.clone(),
            cols: Vec::new(),
            row_count: counts.get(&row.sheet_id).copied().unwrap_or(0),
        });
        shape.cols.push(ColumnDescriptor {
            id: row.column_id,
            name: row.column_name,
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_row(sheet_id: SheetId, column_id: ColId) -> SheetColumnRow {
        SheetColumnRow {
            sheet_id,
            sheet_name: Some(format!("sheet-{sheet_id}")),
            column_id,
            column_name: None,
        }
    }

    #[test]
    fn test_row_count_is_max_across_columns() {
        // Sheet 1: col 0 occupies rows 0..4 (5 rows), col 1 rows 0..1 (2 rows).
        let rows = vec![join_row(1, 0), join_row(1, 1)];
        let counts = HashMap::from([(1, 5)]);

        let shapes = merge_shapes(rows, &counts);
        let shape = &shapes[&1];
        assert_eq!(shape.row_count, 5);
        let col_ids: Vec<ColId> = shape.cols.iter().map(|c| c.id).collect();
        assert_eq!(col_ids, vec![0, 1]);
    }

    #[test]
    fn test_sheet_without_cells_counts_zero_rows() {
        let rows = vec![join_row(4, 2)];
        let shapes = merge_shapes(rows, &HashMap::new());
        assert_eq!(shapes[&4].row_count, 0);
    }

    #[test]
    fn test_sheets_without_columns_are_absent() {
        // Counts alone do not materialize a shape; only join rows do.
        let counts = HashMap::from([(9, 3)]);
        let shapes = merge_shapes(Vec::new(), &counts);
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_multiple_sheets_merge_independently() {
        let rows = vec![join_row(2, 0), join_row(1, 0), join_row(2, 1)];
        let counts = HashMap::from([(1, 1), (2, 7)]);

        let shapes = merge_shapes(rows, &counts);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[&1].row_count, 1);
        assert_eq!(shapes[&1].cols.len(), 1);
        assert_eq!(shapes[&2].row_count, 7);
        assert_eq!(shapes[&2].cols.len(), 2);
        assert_eq!(shapes[&2].name.as_deref(), Some("sheet-2"));
    }

    #[test]
    fn test_shape_keeps_first_seen_sheet_name() {
        let rows = vec![
            SheetColumnRow {
                sheet_id: 1,
                sheet_name: Some("budget".to_string()),
                column_id: 0,
                column_name: Some("month".to_string()),
            },
            SheetColumnRow {
                sheet_id: 1,
                sheet_name: Some("budget".to_string()),
                column_id: 1,
                column_name: None,
            },
        ];
        let shapes = merge_shapes(rows, &HashMap::new());
        let shape = &shapes[&1];
        assert_eq!(shape.name.as_deref(), Some("budget"));
        assert_eq!(shape.cols[0].name.as_deref(), Some("month"));
        assert_eq!(shape.cols[1].name, None);
    }
}
