//! Built-in range functions
//!
//! Aggregates are registered in a static table keyed by their upper-case
//! name; [`Operation`] is the parsed handle into that table.

pub mod aggregate;
pub mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::{EvalError, EvalResult};

/// The coerced contents of a range, as seen by an aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSample {
    /// Values of the numeric-coercible cells, row by row
    pub numbers: Vec<f64>,
    /// Cells that are not blank (numbers and non-whitespace text)
    pub non_empty: usize,
    /// All cells in the range
    pub cells: usize,
}

/// Function implementation signature
pub type FunctionImpl = fn(&NumericSample) -> EvalResult<f64>;

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Parsed handle
    pub operation: Operation,
    /// One-line description for help output
    pub summary: &'static str,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Aggregate operations supported over a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sum,
    Average,
    Max,
    Min,
    /// Count of numeric cells
    Count,
    /// Count of non-blank cells, numeric or not
    CountA,
}

static FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "SUM",
        operation: Operation::Sum,
        summary: "sum of numeric cells (0 when there are none)",
        implementation: aggregate::fn_sum,
    },
    FunctionDef {
        name: "AVERAGE",
        operation: Operation::Average,
        summary: "mean of numeric cells",
        implementation: aggregate::fn_average,
    },
    FunctionDef {
        name: "MAX",
        operation: Operation::Max,
        summary: "largest numeric cell",
        implementation: aggregate::fn_max,
    },
    FunctionDef {
        name: "MIN",
        operation: Operation::Min,
        summary: "smallest numeric cell",
        implementation: aggregate::fn_min,
    },
    FunctionDef {
        name: "COUNT",
        operation: Operation::Count,
        summary: "number of numeric cells",
        implementation: aggregate::fn_count,
    },
    FunctionDef {
        name: "COUNTA",
        operation: Operation::CountA,
        summary: "number of non-blank cells",
        implementation: aggregate::fn_counta,
    },
];

impl Operation {
    /// Every supported operation, in display order
    pub const ALL: [Operation; 6] = [
        Operation::Sum,
        Operation::Average,
        Operation::Max,
        Operation::Min,
        Operation::Count,
        Operation::CountA,
    ];

    /// Look up an operation by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        FUNCTIONS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .map(|def| def.operation)
    }

    /// The registered definition for this operation
    pub fn def(&self) -> &'static FunctionDef {
        // FUNCTIONS is laid out in declaration order of the enum
        &FUNCTIONS[*self as usize]
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// Run the operation over a coerced sample
    pub fn apply(&self, sample: &NumericSample) -> EvalResult<f64> {
        (self.def().implementation)(sample)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EvalError;

    fn from_str(s: &str) -> EvalResult<Self> {
        Self::from_name(s).ok_or_else(|| EvalError::UnsupportedOperation(s.trim().to_string()))
    }
}
