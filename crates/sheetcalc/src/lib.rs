//! # sheetcalc
//!
//! A small in-memory spreadsheet engine.
//!
//! ## Features
//!
//! - A dense grid of untyped cells with letter-labelled columns
//! - A1-style range addressing against the grid's current shape
//! - SUM / AVERAGE / MAX / MIN / COUNT / COUNTA over a range
//! - Data-quality operations (trim, case mapping, find/replace, dedup)
//! - Font styling records per range
//! - Read and write CSV files
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::from_grid(Grid::from_rows(vec![
//!     vec![CellValue::from(1), 2.into(), 3.into()],
//!     vec![4.into(), "x".into(), 6.into()],
//!     vec![7.into(), 8.into(), 9.into()],
//! ]));
//!
//! assert_eq!(sheet.aggregate("SUM", "A1", "C3").unwrap(), 40.0);
//! assert_eq!(sheet.aggregate("count", "C3", "A1").unwrap(), 8.0);
//!
//! sheet.clean(&CleanupOp::Upper).unwrap();
//! assert_eq!(sheet.grid().get(1, 1), Some(&CellValue::text("X")));
//!
//! // sheet.save("output.csv").unwrap();
//! ```

mod error;
pub mod prelude;
mod spreadsheet;

pub use error::{Error, Result};
pub use spreadsheet::Spreadsheet;

// Re-export core types
pub use sheetcalc_core::{
    CellAddress, CellRange, CellValue, Color, FontStyle, FontWeight, Grid, RangeCell, RangeView,
    StyleMap, DEFAULT_COLS, DEFAULT_ROWS,
};

// Re-export evaluation types
pub use sheetcalc_eval::{
    apply_cleanup, coerce_number, column_totals, AddressError, AggregateEvaluator,
    AggregateResult, CleanupOp, ColumnTotal, EvalError, GridShape, Operation, RangeAddressResolver,
    RangeSummary,
};

// Re-export I/O types
pub use sheetcalc_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};
