//! Borrowed rectangular views over a [`Grid`]

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::grid::Grid;

/// A read-only view of a rectangle of cells in a grid
///
/// Obtained from [`Grid::view`], which guarantees the range lies inside the
/// grid's shape at the time of borrowing.
pub struct RangeView<'a> {
    grid: &'a Grid,
    range: CellRange,
}

impl<'a> RangeView<'a> {
    pub(crate) fn new(grid: &'a Grid, range: CellRange) -> Self {
        Self { grid, range }
    }

    /// Get the cell range
    pub fn range(&self) -> &CellRange {
        &self.range
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.range.row_count()
    }

    /// Get the number of columns
    pub fn col_count(&self) -> usize {
        self.range.col_count()
    }

    /// Get a cell by position relative to the top-left corner
    pub fn value(&self, row: usize, col: usize) -> Option<&'a CellValue> {
        if row >= self.row_count() || col >= self.col_count() {
            return None;
        }
        self.grid
            .get(self.range.start.row + row, self.range.start.col + col)
    }

    /// Iterate over all cells in the view, row by row
    pub fn cells(&self) -> impl Iterator<Item = RangeCell<'a>> + '_ {
        let grid = self.grid;
        self.range.cells().map(move |address| RangeCell {
            address,
            value: grid.get_at(address).unwrap_or(&EMPTY),
        })
    }

    /// Iterate over just the values, row by row
    pub fn values(&self) -> impl Iterator<Item = &'a CellValue> + '_ {
        self.cells().map(|cell| cell.value)
    }

    /// Get the A1-style address of this view
    pub fn address(&self) -> String {
        self.range.to_a1_string()
    }
}

static EMPTY: CellValue = CellValue::Empty;

/// A cell within a view iteration
#[derive(Debug, Clone, Copy)]
pub struct RangeCell<'a> {
    /// The cell's absolute address
    pub address: CellAddress,
    /// The cell's value
    pub value: &'a CellValue,
}
