//! Numeric coercion of cell values
//!
//! Cells are untyped, so aggregates first decide which cells count as
//! numbers. Text qualifies when, after trimming, it is a plain decimal
//! literal: optional sign, digits with an optional fraction (or a bare
//! fraction like `.5`), optional exponent. Everything else, including empty
//! cells and spellings such as `nan` or `inf`, is not a number. It is never
//! treated as zero.

use lazy_regex::regex_is_match;
use sheetcalc_core::CellValue;

/// Coerce a cell to a number, or `None` if it is not numeric
///
/// # Examples
/// ```
/// use sheetcalc_core::CellValue;
/// use sheetcalc_eval::coerce_number;
///
/// assert_eq!(coerce_number(&CellValue::text(" 4.5 ")), Some(4.5));
/// assert_eq!(coerce_number(&CellValue::text("x")), None);
/// assert_eq!(coerce_number(&CellValue::Empty), None);
/// ```
pub fn coerce_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Number(_) | CellValue::Empty => None,
        CellValue::Text(text) => parse_numeric_text(text),
    }
}

/// Parse text under the permissive decimal grammar
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if !regex_is_match!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$", text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
