//! The spreadsheet document: a grid plus its styling records

use std::path::Path;

use sheetcalc_core::{CellRange, CellValue, FontStyle, Grid, StyleMap};
use sheetcalc_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
use sheetcalc_eval::{
    apply_cleanup, column_totals, AggregateEvaluator, AggregateResult, CleanupOp, ColumnTotal,
    GridShape, RangeAddressResolver,
};

use crate::error::{Error, Result};

/// A single editable sheet
///
/// Evaluation borrows the grid immutably; edits go through `&mut self`.
/// Embedders sharing one sheet across threads wrap it in a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Spreadsheet {
    grid: Grid,
    styles: StyleMap,
}

impl Spreadsheet {
    /// Create a sheet with a 5×5 empty grid
    pub fn new() -> Self {
        Self::from_grid(Grid::default())
    }

    /// Wrap an existing grid, with no styles
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            styles: StyleMap::new(),
        }
    }

    /// Open a sheet from a file, choosing the format by extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("csv") => {
                let grid = CsvReader::read_file(path, &CsvReadOptions::default())?;
                Ok(Self::from_grid(grid))
            }
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Save the grid to a file, choosing the format by extension
    ///
    /// Styles are not persisted; CSV has nowhere to put them. CSV also has
    /// no cell types, so text that reads as a number (`"1"`, `" 5 "`) is
    /// loaded back by [`Spreadsheet::open`] as a `Number`. Aggregates over
    /// the reopened grid are unchanged since such text already coerces.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match extension(path).as_deref() {
            Some("csv") => {
                CsvWriter::write_file(&self.grid, path, &CsvWriteOptions::default())?;
                Ok(())
            }
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// The current (rows, columns) shape
    pub fn shape(&self) -> GridShape {
        GridShape::of(&self.grid)
    }

    /// Set one cell by A1 address
    pub fn set_cell<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = RangeAddressResolver::resolve_cell(self.shape(), address)?;
        self.grid.set(addr.row, addr.col, value)?;
        Ok(())
    }

    /// Resolve two corner addresses against the current shape
    pub fn range(&self, start: &str, end: &str) -> Result<CellRange> {
        Ok(RangeAddressResolver::resolve(self.shape(), start, end)?)
    }

    /// Evaluate `operation` over the range between `start` and `end`
    pub fn aggregate(&self, operation: &str, start: &str, end: &str) -> AggregateResult {
        AggregateEvaluator::evaluate_addresses(&self.grid, start, end, operation)
    }

    /// Replace the grid with the result of a cleanup operation
    ///
    /// On error the grid is left unchanged.
    pub fn clean(&mut self, op: &CleanupOp) -> Result<()> {
        self.grid = apply_cleanup(&self.grid, op)?;
        Ok(())
    }

    /// Record a font style for the range between `start` and `end`
    ///
    /// Returns the normalized range the style was attached to.
    pub fn apply_style(&mut self, start: &str, end: &str, style: FontStyle) -> Result<CellRange> {
        let range = self.range(start, end)?;
        tracing::debug!(
            %range,
            size_px = style.size_px(),
            color = %style.color(),
            weight = %style.weight(),
            "applied style"
        );
        self.styles.apply(range, style);
        Ok(range)
    }

    /// Remove all recorded styles
    pub fn clear_styles(&mut self) {
        self.styles.clear();
    }

    /// Per-column sums, left to right
    pub fn column_totals(&self) -> Vec<ColumnTotal> {
        column_totals(&self.grid)
    }

    // === Row/column structure ===

    pub fn add_row(&mut self) {
        self.grid.push_row();
    }

    pub fn add_column(&mut self) {
        self.grid.push_column();
    }

    pub fn insert_row(&mut self, at: usize) -> Result<()> {
        Ok(self.grid.insert_row(at)?)
    }

    pub fn insert_column(&mut self, at: usize) -> Result<()> {
        Ok(self.grid.insert_column(at)?)
    }

    /// Remove a row; ranges resolved earlier may now be out of range
    pub fn remove_row(&mut self, at: usize) -> Result<Vec<CellValue>> {
        Ok(self.grid.remove_row(at)?)
    }

    /// Remove a column; later columns shift left and are relabelled
    pub fn remove_column(&mut self, at: usize) -> Result<Vec<CellValue>> {
        Ok(self.grid.remove_column(at)?)
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for Spreadsheet {
    fn from(grid: Grid) -> Self {
        Self::from_grid(grid)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
