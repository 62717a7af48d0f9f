//! # sheetcalc-core
//!
//! Core data structures for the sheetcalc spreadsheet toolkit.
//!
//! This crate provides the fundamental types used throughout sheetcalc:
//! - [`CellValue`] - Untyped cell contents (text, number, empty)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Grid`] - The dense, letter-labelled cell grid
//! - [`FontStyle`] and [`StyleMap`] - Per-range font styling records
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{CellValue, Grid};
//!
//! let mut grid = Grid::default();
//! assert_eq!(grid.shape(), (5, 5));
//!
//! grid.set(0, 0, 42.0).unwrap();
//! grid.set(0, 1, "hello").unwrap();
//! assert_eq!(grid.get(0, 0), Some(&CellValue::Number(42.0)));
//! assert_eq!(grid.column_label(1), "B");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod range;
pub mod style;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue};
pub use error::{Error, Result};
pub use grid::Grid;
pub use range::{RangeCell, RangeView};
pub use style::{Color, FontStyle, FontWeight, StyleMap};

/// Default number of rows in a fresh grid
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns in a fresh grid
pub const DEFAULT_COLS: usize = 5;
