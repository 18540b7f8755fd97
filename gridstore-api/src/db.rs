//! Database Client
//!
//! Wraps the deadpool-postgres pool and exposes one method per storage
//! operation. Every query is a fixed parameterized statement; the rename
//! templates are chosen by `RenameTarget`, never built from request text.
//!
//! Connections are pool-guarded objects, so release-on-all-paths is
//! structural rather than a cleanup obligation on each caller.

use std::collections::{BTreeMap, HashMap};

use gridstore_core::{
    distinct_columns, merge_shapes, CellRecord, CellWrite, RenameTarget, SheetColumnRow, SheetId,
    SheetShape,
};

use crate::config::DbConfig;
use crate::error::ApiResult;

/// Sheet-column join feeding the shape aggregation. Sheets without columns
/// do not appear.
const SHEET_COLUMNS_SQL: &str = "\
SELECT sheets.id AS sheet_id,
       sheets.name AS sheet_name,
       columns.id AS column_id,
       columns.name AS column_name
FROM sheets
INNER JOIN columns ON columns.sheet_id = sheets.id";

/// Per-sheet occupied-row count: distinct rows per (sheet, column), then the
/// max across the sheet's columns. Two aggregation levels on purpose; a
/// single mixed group-by would conflate columns.
const ROW_COUNTS_SQL: &str = "\
WITH per_column AS (
    SELECT sheet_id,
           COUNT(DISTINCT row_id) AS row_count
    FROM cells
    GROUP BY sheet_id, col_id
)
SELECT sheet_id, MAX(row_count) AS row_count
FROM per_column
GROUP BY sheet_id";

/// Database client that wraps a connection pool and provides the cell store,
/// aggregator, allocator and rename operations.
#[derive(Clone)]
pub struct DbClient {
    pool: deadpool_postgres::Pool,
}

impl DbClient {
    /// Create a new database client with the given pool.
    pub fn new(pool: deadpool_postgres::Pool) -> Self {
        Self { pool }
    }

    /// Create a new database client from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get the current pool size for observability.
    pub fn pool_size(&self) -> usize {
        self.pool.status().size
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ApiResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(crate::error::ApiError::from)
    }

    /// Apply the schema idempotently. Called once at startup.
    pub async fn init_schema(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.batch_execute(include_str!("../sql/schema.sql")).await?;
        Ok(())
    }

    /// Cheap connectivity probe for readiness checks.
    pub async fn ping(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    // ========================================================================
    // CELL STORE
    // ========================================================================

    /// Every stored cell of a sheet, in no guaranteed order. An empty result
    /// is a valid sheet, not an error.
    pub async fn fetch_cells(&self, sheet_id: SheetId) -> ApiResult<Vec<CellRecord>> {
        let conn = self.get_conn().await?;
        let rows = conn
            .query(
                "SELECT sheet_id, row_id, col_id, cell_value FROM cells WHERE sheet_id = $1",
                &[&sheet_id],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| CellRecord {
                sheet_id: row.get("sheet_id"),
                row_id: row.get("row_id"),
                col_id: row.get("col_id"),
                value: row.get("cell_value"),
            })
            .collect())
    }

    /// Durably merge one validated single-sheet batch.
    ///
    /// One transaction covers the whole write: sheet bootstrap
    /// (insert-if-absent, an existing sheet's name is never touched), one
    /// column record per distinct column index, then every cell upsert.
    /// Readers observe either the whole batch or none of it. Any storage
    /// failure rolls back and surfaces to the caller; no retries here.
    pub async fn save_cells(&self, sheet_id: SheetId, cells: &[CellWrite]) -> ApiResult<()> {
        let mut conn = self.get_conn().await?;
        let tx = conn.transaction().await?;

        tx.execute(
            "INSERT INTO sheets (id, name) VALUES ($1, NULL) ON CONFLICT (id) DO NOTHING",
            &[&sheet_id],
        )
        .await?;

        let column_stmt = tx
            .prepare(
                "INSERT INTO columns (id, sheet_id) VALUES ($1, $2) \
                 ON CONFLICT (sheet_id, id) DO NOTHING",
            )
            .await?;
        for col_id in distinct_columns(cells) {
            tx.execute(&column_stmt, &[&col_id, &sheet_id]).await?;
        }

        let cell_stmt = tx
            .prepare(
                "INSERT INTO cells (sheet_id, row_id, col_id, cell_value) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (sheet_id, row_id, col_id) \
                 DO UPDATE SET cell_value = EXCLUDED.cell_value",
            )
            .await?;
        for cell in cells {
            tx.execute(
                &cell_stmt,
                &[&sheet_id, &cell.row_index, &cell.col_index, &cell.content],
            )
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(sheet_id, cells = cells.len(), "cell batch committed");
        Ok(())
    }

    // ========================================================================
    // SHEET ALLOCATOR
    // ========================================================================

    /// One greater than the current maximum sheet id, or 0 when no sheets
    /// exist. Advisory only: the id is not reserved, and two concurrent
    /// callers may receive the same value. Correctness rests on the
    /// insert-if-absent sheet bootstrap in `save_cells`.
    pub async fn next_sheet_id(&self) -> ApiResult<SheetId> {
        let conn = self.get_conn().await?;
        let row = conn
            .query_one("SELECT COALESCE(MAX(id) + 1, 0) FROM sheets", &[])
            .await?;
        Ok(row.get(0))
    }

    // ========================================================================
    // NAME UPDATER
    // ========================================================================

    /// Rename one row of an allow-listed target. The statement is fixed per
    /// variant; only the name and id travel as parameters. Updating zero
    /// rows is not distinguished from success.
    pub async fn update_name(
        &self,
        target: RenameTarget,
        id: i64,
        new_name: Option<&str>,
    ) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        let updated = conn.execute(target.update_sql(), &[&new_name, &id]).await?;
        tracing::debug!(table = target.as_str(), id, updated, "name update applied");
        Ok(())
    }

    // ========================================================================
    // SHEET METADATA AGGREGATOR
    // ========================================================================

    /// Reconstruct every sheet's shape from the sparse data: two full scans
    /// (sheet-column join, per-sheet row counts) merged in memory. No
    /// incremental or cached materialization; cardinalities are assumed
    /// small.
    pub async fn sheet_shapes(&self) -> ApiResult<BTreeMap<SheetId, SheetShape>> {
        let conn = self.get_conn().await?;

        let column_rows = conn.query(SHEET_COLUMNS_SQL, &[]).await?;
        let count_rows = conn.query(ROW_COUNTS_SQL, &[]).await?;

        let counts: HashMap<SheetId, i64> = count_rows
            .iter()
            .map(|row| (row.get("sheet_id"), row.get("row_count")))
            .collect();

        let rows: Vec<SheetColumnRow> = column_rows
            .iter()
            .map(|row| SheetColumnRow {
                sheet_id: row.get("sheet_id"),
                sheet_name: row.get("sheet_name"),
                column_id: row.get("column_id"),
                column_name: row.get("column_name"),
            })
            .collect();

        Ok(merge_shapes(rows, &counts))
    }
}
