//! API Request and Response Types
//!
//! Wire shapes for the REST endpoints. Domain types live in
//! `gridstore-core`; these are the envelopes around them.

use gridstore_core::{CellRecord, CellWrite};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/cells/saveCells`.
///
/// `cells` is optional on purpose: a missing field must produce the same
/// client-input error as an empty batch, not a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SaveCellsRequest {
    pub cells: Option<Vec<CellWrite>>,
}

/// One cell as returned by `GET /api/cells/{sheetId}`: a flat
/// `"<sheet>-<row>-<col>"` id plus the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CellEntry {
    pub id: String,
    pub value: Option<String>,
}

impl From<&CellRecord> for CellEntry {
    fn from(record: &CellRecord) -> Self {
        Self {
            id: record.qualified_id(),
            value: record.value.clone(),
        }
    }
}

/// Request body for `POST /api/updateName`.
///
/// `sheet_id` is the id of the renamed row within the chosen category (the
/// field name predates the column/row-group targets). `new_name` may be
/// null to clear a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateNameRequest {
    pub sheet_id: i64,
    pub new_name: Option<String>,
    pub table_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_entry_from_record() {
        let record = CellRecord {
            sheet_id: 2,
            row_id: 5,
            col_id: 1,
            value: Some("total".to_string()),
        };
        let entry = CellEntry::from(&record);
        assert_eq!(entry.id, "2-5-1");
        assert_eq!(entry.value.as_deref(), Some("total"));
    }

    #[test]
    fn test_save_cells_request_missing_field() -> Result<(), serde_json::Error> {
        let req: SaveCellsRequest = serde_json::from_str("{}")?;
        assert_eq!(req.cells, None);

        let req: SaveCellsRequest = serde_json::from_str(r#"{"cells":[]}"#)?;
        assert_eq!(req.cells, Some(Vec::new()));
        Ok(())
    }

    #[test]
    fn test_update_name_request_nullable_name() -> Result<(), serde_json::Error> {
        let req: UpdateNameRequest =
            serde_json::from_str(r#"{"sheet_id":1,"new_name":null,"table_name":"sheets"}"#)?;
        assert_eq!(req.new_name, None);
        assert_eq!(req.table_name, "sheets");
        Ok(())
    }
}
