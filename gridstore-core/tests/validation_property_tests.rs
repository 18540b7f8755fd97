//! Property-Based Tests for Batch Validation
//!
//! Any batch of in-bounds writes targeting one sheet validates to that sheet
//! id; any batch containing an out-of-range coordinate or a second sheet id
//! is rejected before storage is touched.

use gridstore_core::{
    validate_batch, CellWrite, ValidationError, MAX_COL_INDEX, MAX_ROW_INDEX, MAX_SHEET_ID,
};
use proptest::prelude::*;

fn coords_strategy() -> impl Strategy<Value = (i64, i64, Option<String>)> {
    (
        0..=MAX_ROW_INDEX,
        0..=MAX_COL_INDEX,
        prop::option::of("[a-z0-9 ]{0,12}"),
    )
}

fn batch(sheet_id: i64, coords: Vec<(i64, i64, Option<String>)>) -> Vec<CellWrite> {
    coords
        .into_iter()
        .map(|(row_index, col_index, content)| CellWrite {
            sheet_id,
            row_index,
            col_index,
            content,
        })
        .collect()
}

proptest! {
    #[test]
    fn in_bounds_single_sheet_batches_validate(
        sheet_id in 0..=MAX_SHEET_ID,
        coords in prop::collection::vec(coords_strategy(), 1..64),
    ) {
        prop_assert_eq!(validate_batch(&batch(sheet_id, coords)), Ok(sheet_id));
    }

    #[test]
    fn negative_coordinates_are_rejected(
        sheet_id in 0..=MAX_SHEET_ID,
        row in i64::MIN..0,
        col in 0..=MAX_COL_INDEX,
    ) {
        let cells = vec![CellWrite {
            sheet_id,
            row_index: row,
            col_index: col,
            content: None,
        }];
        prop_assert!(
            matches!(
                validate_batch(&cells),
                Err(ValidationError::OutOfRange { field: "row index", .. })
            ),
            "expected out-of-range rejection for row index"
        );
    }

    #[test]
    fn second_sheet_id_is_rejected(
        sheet_a in 0..=MAX_SHEET_ID,
        offset in 1..=1000i64,
        coords in prop::collection::vec(coords_strategy(), 1..16),
        stray in coords_strategy(),
    ) {
        let sheet_b = (sheet_a + offset) % (MAX_SHEET_ID + 1);
        prop_assume!(sheet_a != sheet_b);

        let mut cells = batch(sheet_a, coords);
        let (row_index, col_index, content) = stray;
        cells.push(CellWrite { sheet_id: sheet_b, row_index, col_index, content });

        prop_assert_eq!(
            validate_batch(&cells),
            Err(ValidationError::MixedSheetBatch { expected: sheet_a, found: sheet_b })
        );
    }
}
