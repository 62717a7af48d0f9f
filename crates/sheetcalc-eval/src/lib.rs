//! # sheetcalc-eval
//!
//! Range addressing and aggregate evaluation for sheetcalc.
//!
//! This crate provides:
//! - [`RangeAddressResolver`] - `"A1"` / `"B5"` text → a normalized [`CellRange`]
//!   bounded by the grid's current shape
//! - [`AggregateEvaluator`] - SUM / AVERAGE / MAX / MIN / COUNT / COUNTA over a range
//! - [`apply_cleanup`] - TRIM / UPPER / LOWER / FIND_AND_REPLACE / REMOVE_DUPLICATES
//! - [`column_totals`] - per-column sums
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::Grid;
//! use sheetcalc_eval::{AggregateEvaluator, GridShape, RangeAddressResolver};
//!
//! let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! let range = RangeAddressResolver::resolve(GridShape::of(&grid), "B2", "A1").unwrap();
//! let total = AggregateEvaluator::evaluate(&grid, &range, "SUM").unwrap();
//! assert_eq!(total, 10.0);
//! ```
//!
//! [`CellRange`]: sheetcalc_core::CellRange

pub mod aggregate;
pub mod cleanup;
pub mod coerce;
pub mod error;
pub mod functions;
pub mod resolver;
pub mod totals;

pub use aggregate::{AggregateEvaluator, AggregateResult, RangeSummary};
pub use cleanup::{apply_cleanup, CleanupOp};
pub use coerce::coerce_number;
pub use error::{AddressError, EvalError, EvalResult};
pub use functions::Operation;
pub use resolver::{GridShape, RangeAddressResolver};
pub use totals::{column_totals, ColumnTotal};
