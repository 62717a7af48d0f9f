//! Grid type

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::range::RangeView;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// A dense, rectangular grid of cells
///
/// Every row holds exactly [`Grid::col_count`] cells; all constructors and
/// mutators preserve that. Column labels (A, B, ..., AA) are derived from
/// the column index, so they never go stale when columns move.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
    cols: usize,
}

impl Grid {
    /// Create an empty grid of the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![CellValue::Empty; cols]; rows],
            cols,
        }
    }

    /// Build a grid from row data
    ///
    /// Short rows are padded with [`CellValue::Empty`] up to the widest row.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<CellValue>,
    {
        let mut rows: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(cols, CellValue::Empty);
        }

        Self { rows, cols }
    }

    /// Get the (rows, columns) shape
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols)
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Check whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols == 0
    }

    /// The letter label of a column (0 = A)
    pub fn column_label(&self, col: usize) -> String {
        CellAddress::column_to_letters(col)
    }

    /// Labels of all current columns, in order
    pub fn column_labels(&self) -> Vec<String> {
        (0..self.cols).map(CellAddress::column_to_letters).collect()
    }

    /// Get a cell by 0-based indices
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell by address
    pub fn get_at(&self, addr: CellAddress) -> Option<&CellValue> {
        self.get(addr.row, addr.col)
    }

    /// Set a cell value by 0-based indices
    pub fn set<V: Into<CellValue>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        self.check_col(col)?;
        let rows = self.rows.len();
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::RowOutOfBounds(row, rows))?;
        *cell = value.into();
        Ok(())
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterate over the cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |r| r.get(col))
    }

    /// Apply `f` to every cell, producing a new grid of the same shape
    pub fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
            cols: self.cols,
        }
    }

    /// Keep only the rows for which `keep` returns true
    pub fn retain_rows<F>(&mut self, keep: F)
    where
        F: FnMut(&Vec<CellValue>) -> bool,
    {
        self.rows.retain(keep);
    }

    /// The range covering the whole grid, or `None` when it has no cells
    pub fn full_range(&self) -> Option<CellRange> {
        if self.is_empty() {
            return None;
        }
        Some(CellRange::from_indices(0, 0, self.rows.len() - 1, self.cols - 1))
    }

    /// Borrow a rectangular view of the grid
    ///
    /// Fails if any part of `range` lies outside the current shape.
    pub fn view(&self, range: CellRange) -> Result<RangeView<'_>> {
        self.check_col(range.end.col)?;
        self.check_row(range.end.row)?;
        Ok(RangeView::new(self, range))
    }

    // === Row/column structure ===

    /// Insert an empty row before `at` (`at == row_count` appends)
    pub fn insert_row(&mut self, at: usize) -> Result<()> {
        if at > self.rows.len() {
            return Err(Error::RowOutOfBounds(at, self.rows.len()));
        }
        self.rows.insert(at, vec![CellValue::Empty; self.cols]);
        Ok(())
    }

    /// Append an empty row
    pub fn push_row(&mut self) {
        self.rows.push(vec![CellValue::Empty; self.cols]);
    }

    /// Remove a row, returning its cells
    pub fn remove_row(&mut self, at: usize) -> Result<Vec<CellValue>> {
        self.check_row(at)?;
        Ok(self.rows.remove(at))
    }

    /// Insert an empty column before `at` (`at == col_count` appends)
    pub fn insert_column(&mut self, at: usize) -> Result<()> {
        if at > self.cols {
            return Err(Error::ColumnOutOfBounds(at, self.cols));
        }
        for row in &mut self.rows {
            row.insert(at, CellValue::Empty);
        }
        self.cols += 1;
        Ok(())
    }

    /// Append an empty column
    pub fn push_column(&mut self) {
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
        self.cols += 1;
    }

    /// Remove a column, returning its cells top to bottom
    pub fn remove_column(&mut self, at: usize) -> Result<Vec<CellValue>> {
        self.check_col(at)?;
        let removed = self.rows.iter_mut().map(|row| row.remove(at)).collect();
        self.cols -= 1;
        Ok(removed)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(Error::RowOutOfBounds(row, self.rows.len()));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(col, self.cols));
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
