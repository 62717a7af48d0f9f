//! Aggregate evaluation over a grid range

use sheetcalc_core::{CellRange, Grid};

use crate::coerce::coerce_number;
use crate::error::{EvalError, EvalResult};
use crate::functions::{NumericSample, Operation};
use crate::resolver::{GridShape, RangeAddressResolver};

/// Outcome of one aggregate request: a number or a structured error
pub type AggregateResult = EvalResult<f64>;

/// Cell counts describing a range
///
/// Separates the three notions of "how many" a range has: all cells,
/// non-blank cells and numeric-coercible cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSummary {
    /// Every cell in the range
    pub cells: usize,
    /// Cells that are not empty or whitespace-only
    pub non_empty: usize,
    /// Cells that coerce to a number (what COUNT reports)
    pub numeric: usize,
}

/// Evaluates aggregates over rectangular ranges of a grid
///
/// Read-only over the grid; nothing is cached between calls.
pub struct AggregateEvaluator;

impl AggregateEvaluator {
    /// Evaluate the operation named `operation` over `range`
    ///
    /// The name is matched case-insensitively. The range must fit the
    /// grid's current shape, which matters when the grid shrank after the
    /// range was resolved.
    pub fn evaluate(grid: &Grid, range: &CellRange, operation: &str) -> AggregateResult {
        let op: Operation = operation.parse()?;
        Self::evaluate_op(grid, range, op)
    }

    /// Evaluate an already-parsed operation over `range`
    pub fn evaluate_op(grid: &Grid, range: &CellRange, op: Operation) -> AggregateResult {
        let sample = Self::sample(grid, range)?;
        let result = op.apply(&sample);
        tracing::debug!(
            %op,
            %range,
            numeric = sample.numbers.len(),
            cells = sample.cells,
            ok = result.is_ok(),
            "evaluated aggregate"
        );
        result
    }

    /// Resolve two corner addresses and evaluate in one step
    pub fn evaluate_addresses(
        grid: &Grid,
        start_text: &str,
        end_text: &str,
        operation: &str,
    ) -> AggregateResult {
        // An unknown operation is reported even when the addresses are bad
        let op: Operation = operation.parse()?;
        let range = RangeAddressResolver::resolve(GridShape::of(grid), start_text, end_text)?;
        Self::evaluate_op(grid, &range, op)
    }

    /// Count the cells of `range` by kind
    pub fn summarize(grid: &Grid, range: &CellRange) -> EvalResult<RangeSummary> {
        let sample = Self::sample(grid, range)?;
        Ok(RangeSummary {
            cells: sample.cells,
            non_empty: sample.non_empty,
            numeric: sample.numbers.len(),
        })
    }

    /// Slice the grid and coerce every cell of the range
    fn sample(grid: &Grid, range: &CellRange) -> EvalResult<NumericSample> {
        GridShape::of(grid).check_range(range)?;
        let view = grid.view(*range)?;

        let mut sample = NumericSample::default();
        for value in view.values() {
            sample.cells += 1;
            if !value.is_blank() {
                sample.non_empty += 1;
            }
            if let Some(n) = coerce_number(value) {
                sample.numbers.push(n);
            }
        }
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use pretty_assertions::assert_eq;
    use sheetcalc_core::CellValue;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec![CellValue::from(1), 2.into(), 3.into()],
            vec![4.into(), "x".into(), 6.into()],
            vec![7.into(), 8.into(), 9.into()],
        ])
    }

    fn full(grid: &Grid) -> CellRange {
        RangeAddressResolver::resolve(GridShape::of(grid), "A1", "C3").unwrap()
    }

    #[test]
    fn test_aggregates_skip_non_numeric_cells() {
        let grid = sample_grid();
        let range = full(&grid);

        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "SUM"), Ok(40.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "COUNT"), Ok(8.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "AVERAGE"), Ok(5.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "MAX"), Ok(9.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "MIN"), Ok(1.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "COUNTA"), Ok(9.0));
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let grid = Grid::from_rows(vec![vec!["1", " 2.5 ", "", "abc"]]);
        let range = CellRange::parse("A1:D1").unwrap();

        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "sum"), Ok(3.5));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "count"), Ok(2.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "counta"), Ok(3.0));
    }

    #[test]
    fn test_only_non_numeric_cells() {
        let grid = Grid::from_rows(vec![vec!["", ""], vec!["", ""]]);
        let range = CellRange::parse("A1:B2").unwrap();

        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "SUM"), Ok(0.0));
        assert_eq!(AggregateEvaluator::evaluate(&grid, &range, "COUNT"), Ok(0.0));
        for (name, op) in [
            ("AVERAGE", Operation::Average),
            ("MAX", Operation::Max),
            ("MIN", Operation::Min),
        ] {
            assert_eq!(
                AggregateEvaluator::evaluate(&grid, &range, name),
                Err(EvalError::NoNumericData(op))
            );
        }
    }

    #[test]
    fn test_unsupported_operation() {
        let grid = sample_grid();
        assert_eq!(
            AggregateEvaluator::evaluate(&grid, &full(&grid), "MEDIAN"),
            Err(EvalError::UnsupportedOperation("MEDIAN".into()))
        );
    }

    #[test]
    fn test_stale_range_after_grid_shrinks() {
        let mut grid = sample_grid();
        let range = full(&grid);
        grid.remove_column(2).unwrap();
        grid.remove_row(2).unwrap();

        // Both axes are now out of range; the column is reported
        assert_eq!(
            AggregateEvaluator::evaluate(&grid, &range, "SUM"),
            Err(EvalError::Address(AddressError::ColumnOutOfRange {
                address: "C3".into(),
                cols: 2
            }))
        );
    }

    #[test]
    fn test_evaluate_addresses() {
        let grid = sample_grid();
        assert_eq!(
            AggregateEvaluator::evaluate_addresses(&grid, "C3", "B2", "SUM"),
            Ok(23.0)
        );
        assert_eq!(
            AggregateEvaluator::evaluate_addresses(&grid, "A1", "Z99", "SUM"),
            Err(EvalError::Address(AddressError::ColumnOutOfRange {
                address: "Z99".into(),
                cols: 3
            }))
        );
        assert_eq!(
            AggregateEvaluator::evaluate_addresses(&grid, "??", "A1", "MODE"),
            Err(EvalError::UnsupportedOperation("MODE".into()))
        );
    }

    #[test]
    fn test_summarize_distinguishes_counts() {
        let grid = Grid::from_rows(vec![vec![CellValue::from(1), "  ".into(), "n/a".into()]]);
        let range = CellRange::parse("A1:C1").unwrap();
        assert_eq!(
            AggregateEvaluator::summarize(&grid, &range).unwrap(),
            RangeSummary {
                cells: 3,
                non_empty: 2,
                numeric: 1,
            }
        );
    }

    #[test]
    fn test_evaluation_does_not_mutate_grid() {
        let grid = sample_grid();
        let before = grid.clone();
        let _ = AggregateEvaluator::evaluate(&grid, &full(&grid), "AVERAGE");
        assert_eq!(grid, before);
    }
}
