//! Address and evaluation error types

use thiserror::Error;

use crate::functions::Operation;

/// Result type for evaluation operations
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors produced while resolving address text against a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text is not of the form `[A-Za-z]+[0-9]+`, or names row 0
    #[error("Malformed address '{0}': expected a column letter followed by a row number, e.g. B3")]
    MalformedAddress(String),

    /// The row lies outside the grid
    #[error("Row of {address} is outside the grid ({rows} rows)")]
    RowOutOfRange { address: String, rows: usize },

    /// The column lies outside the grid
    #[error("Column of {address} is outside the grid ({cols} columns)")]
    ColumnOutOfRange { address: String, cols: usize },
}

/// Errors that can occur during aggregate evaluation or grid cleanup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The range could not be resolved against the grid
    #[error(transparent)]
    Address(#[from] AddressError),

    /// AVERAGE / MAX / MIN over a range without numeric cells
    #[error("{0} needs at least one numeric cell in the range")]
    NoNumericData(Operation),

    /// Unknown operation name
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// FIND_AND_REPLACE pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Grid access failed
    #[error("Grid error: {0}")]
    Grid(#[from] sheetcalc_core::Error),
}
