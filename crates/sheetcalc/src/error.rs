//! Error type for the sheetcalc facade

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure surfaced by a [`Spreadsheet`](crate::Spreadsheet)
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sheetcalc_core::Error),

    #[error(transparent)]
    Address(#[from] sheetcalc_eval::AddressError),

    #[error(transparent)]
    Eval(#[from] sheetcalc_eval::EvalError),

    #[error(transparent)]
    Csv(#[from] sheetcalc_csv::CsvError),

    /// The file extension is not one sheetcalc can read or write
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
