//! Per-column totals, the data behind a "sum by column" chart

use sheetcalc_core::Grid;

use crate::coerce::coerce_number;

/// The SUM of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTotal {
    /// Column label (A, B, ...)
    pub label: String,
    /// Sum of the column's numeric cells; 0 when it has none
    pub total: f64,
}

/// Sum every column of the grid, left to right
pub fn column_totals(grid: &Grid) -> Vec<ColumnTotal> {
    (0..grid.col_count())
        .map(|col| ColumnTotal {
            label: grid.column_label(col),
            total: grid.column(col).filter_map(coerce_number).sum(),
        })
        .collect()
}
