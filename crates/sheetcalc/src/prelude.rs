//! Prelude module - common imports for sheetcalc users
//!
//! ```rust
//! use sheetcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellRange,
    CellValue,
    // Cleanup
    CleanupOp,
    Color,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    EvalError,
    // Style types
    FontStyle,
    FontWeight,
    // Main types
    Grid,
    Operation,
    Result,
    Spreadsheet,
};
