//! Rename targets for the name/label updater.
//!
//! The rename operation is the one place user input chooses which storage
//! target a query runs against. The target is therefore a closed enum: the
//! wire string is matched exactly against the allow-list, and each variant
//! maps to a fixed parameterized statement. No identifier is ever spliced
//! into query text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A permitted rename target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameTarget {
    /// Sheet names (`sheets.name`).
    Sheets,
    /// Column headers (`columns.name`).
    Columns,
    /// Row-group labels (`cell_data.name`).
    CellData,
}

/// Rejected rename target. Carries the offending value for the audit log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("rename target {0:?} is not in the allow-list")]
pub struct UnknownRenameTarget(pub String);

impl RenameTarget {
    /// Every permitted wire value, in allow-list order.
    pub const ALLOWED: [&'static str; 3] = ["sheets", "columns", "cell_data"];

    /// The wire name of this target.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenameTarget::Sheets => "sheets",
            RenameTarget::Columns => "columns",
            RenameTarget::CellData => "cell_data",
        }
    }

    /// The fixed statement that renames one row of this target.
    ///
    /// Parameters: `$1` new name, `$2` row id.
    pub fn update_sql(&self) -> &'static str {
        match self {
            RenameTarget::Sheets => "UPDATE sheets SET name = $1 WHERE id = $2",
            RenameTarget::Columns => "UPDATE columns SET name = $1 WHERE id = $2",
            RenameTarget::CellData => "UPDATE cell_data SET name = $1 WHERE id = $2",
        }
    }
}

impl FromStr for RenameTarget {
    type Err = UnknownRenameTarget;

    /// Exact-match membership test. No trimming, no case folding, no prefix
    /// matching: anything but the three listed strings is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sheets" => Ok(RenameTarget::Sheets),
            "columns" => Ok(RenameTarget::Columns),
            "cell_data" => Ok(RenameTarget::CellData),
            other => Err(UnknownRenameTarget(other.to_string())),
        }
    }
}

impl fmt::Display for RenameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
