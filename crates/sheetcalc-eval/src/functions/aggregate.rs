//! Aggregate functions over a coerced range

use super::{NumericSample, Operation};
use crate::error::{EvalError, EvalResult};

/// SUM: 0 when the range has no numbers
pub fn fn_sum(sample: &NumericSample) -> EvalResult<f64> {
    Ok(sample.numbers.iter().sum())
}

/// AVERAGE
pub fn fn_average(sample: &NumericSample) -> EvalResult<f64> {
    if sample.numbers.is_empty() {
        return Err(EvalError::NoNumericData(Operation::Average));
    }
    let sum: f64 = sample.numbers.iter().sum();
    Ok(sum / sample.numbers.len() as f64)
}

/// MAX
pub fn fn_max(sample: &NumericSample) -> EvalResult<f64> {
    sample
        .numbers
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(EvalError::NoNumericData(Operation::Max))
}

/// MIN
pub fn fn_min(sample: &NumericSample) -> EvalResult<f64> {
    sample
        .numbers
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(EvalError::NoNumericData(Operation::Min))
}

/// COUNT: numeric cells only
pub fn fn_count(sample: &NumericSample) -> EvalResult<f64> {
    Ok(sample.numbers.len() as f64)
}

/// COUNTA: every non-blank cell, numeric or not
pub fn fn_counta(sample: &NumericSample) -> EvalResult<f64> {
    Ok(sample.non_empty as f64)
}
