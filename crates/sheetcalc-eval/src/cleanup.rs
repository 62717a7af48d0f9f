//! Grid-wide data-quality operations
//!
//! Each operation returns a new grid and leaves the input untouched.

use std::fmt;
use std::str::FromStr;

use ahash::AHashSet;
use regex::Regex;
use sheetcalc_core::{CellValue, Grid};

use crate::error::{EvalError, EvalResult};
use crate::functions::text;

/// A data-quality operation over a whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOp {
    /// Strip leading/trailing whitespace from text cells
    Trim,
    /// Upper-case text cells
    Upper,
    /// Lower-case text cells
    Lower,
    /// Drop rows identical to an earlier row
    RemoveDuplicates,
    /// Regex find and replace over text cells
    ///
    /// A no-op unless both `find` and `replace` are non-empty.
    FindAndReplace { find: String, replace: String },
}

impl CleanupOp {
    /// Names accepted by [`CleanupOp::from_str`]
    pub const NAMES: [&'static str; 5] =
        ["TRIM", "UPPER", "LOWER", "REMOVE_DUPLICATES", "FIND_AND_REPLACE"];

    pub fn name(&self) -> &'static str {
        match self {
            CleanupOp::Trim => "TRIM",
            CleanupOp::Upper => "UPPER",
            CleanupOp::Lower => "LOWER",
            CleanupOp::RemoveDuplicates => "REMOVE_DUPLICATES",
            CleanupOp::FindAndReplace { .. } => "FIND_AND_REPLACE",
        }
    }

    /// Build a find-and-replace operation
    pub fn find_and_replace<F: Into<String>, R: Into<String>>(find: F, replace: R) -> Self {
        CleanupOp::FindAndReplace {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

impl fmt::Display for CleanupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CleanupOp {
    type Err = EvalError;

    /// Parse a cleanup name; `FIND_AND_REPLACE` parses with empty
    /// find/replace text, to be filled in by the caller.
    fn from_str(s: &str) -> EvalResult<Self> {
        let name = s.trim().to_ascii_uppercase();
        match name.as_str() {
            "TRIM" => Ok(CleanupOp::Trim),
            "UPPER" => Ok(CleanupOp::Upper),
            "LOWER" => Ok(CleanupOp::Lower),
            "REMOVE_DUPLICATES" => Ok(CleanupOp::RemoveDuplicates),
            "FIND_AND_REPLACE" => Ok(CleanupOp::find_and_replace("", "")),
            _ => Err(EvalError::UnsupportedOperation(s.trim().to_string())),
        }
    }
}

/// Apply a cleanup operation, returning the cleaned grid
pub fn apply_cleanup(grid: &Grid, op: &CleanupOp) -> EvalResult<Grid> {
    let cleaned = match op {
        CleanupOp::Trim => grid.map_cells(text::fn_trim),
        CleanupOp::Upper => grid.map_cells(text::fn_upper),
        CleanupOp::Lower => grid.map_cells(text::fn_lower),
        CleanupOp::RemoveDuplicates => remove_duplicates(grid),
        CleanupOp::FindAndReplace { find, replace } => {
            if find.is_empty() || replace.is_empty() {
                tracing::debug!("find and replace skipped: empty find or replace text");
                return Ok(grid.clone());
            }
            let pattern = Regex::new(find).map_err(|e| EvalError::InvalidPattern(e.to_string()))?;
            grid.map_cells(|value| text::fn_replace(value, &pattern, replace))
        }
    };

    tracing::debug!(
        %op,
        rows_before = grid.row_count(),
        rows_after = cleaned.row_count(),
        "applied cleanup"
    );
    Ok(cleaned)
}

/// Hashable identity of a cell for duplicate detection
///
/// Unlike `f64` equality, NaN matches NaN and -0.0 matches 0.0.
#[derive(Hash, PartialEq, Eq)]
enum CellKey<'a> {
    Empty,
    Number(u64),
    Text(&'a str),
}

impl<'a> CellKey<'a> {
    fn of(value: &'a CellValue) -> Self {
        match value {
            CellValue::Empty => CellKey::Empty,
            CellValue::Number(n) if n.is_nan() => CellKey::Number(f64::NAN.to_bits()),
            CellValue::Number(n) => CellKey::Number((n + 0.0).to_bits()),
            CellValue::Text(s) => CellKey::Text(s),
        }
    }
}

fn remove_duplicates(grid: &Grid) -> Grid {
    let mut seen: AHashSet<Vec<CellKey<'_>>> = AHashSet::with_capacity(grid.row_count());
    let keep: Vec<bool> = grid
        .rows()
        .map(|row| seen.insert(row.iter().map(CellKey::of).collect()))
        .collect();

    let mut deduped = grid.clone();
    let mut keep = keep.into_iter();
    deduped.retain_rows(|_| keep.next().unwrap_or(true));
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetcalc_core::CellValue;

    fn messy() -> Grid {
        Grid::from_rows(vec![
            vec![CellValue::text("  Alice "), 30.into()],
            vec![CellValue::text("bob"), 25.into()],
            vec![CellValue::text("  Alice "), 30.into()],
            vec![CellValue::text("Carol"), CellValue::Empty],
        ])
    }

    #[test]
    fn test_trim_upper_lower() {
        let grid = messy();

        let trimmed = apply_cleanup(&grid, &CleanupOp::Trim).unwrap();
        assert_eq!(trimmed.get(0, 0), Some(&CellValue::text("Alice")));
        assert_eq!(trimmed.get(0, 1), Some(&CellValue::Number(30.0)));

        let upper = apply_cleanup(&grid, &CleanupOp::Upper).unwrap();
        assert_eq!(upper.get(1, 0), Some(&CellValue::text("BOB")));

        let lower = apply_cleanup(&grid, &CleanupOp::Lower).unwrap();
        assert_eq!(lower.get(3, 0), Some(&CellValue::text("carol")));
        assert_eq!(lower.get(3, 1), Some(&CellValue::Empty));

        // Input untouched
        assert_eq!(grid, messy());
    }

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        let deduped = apply_cleanup(&messy(), &CleanupOp::RemoveDuplicates).unwrap();
        assert_eq!(deduped.shape(), (3, 2));
        let names: Vec<String> = deduped.column(0).map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["  Alice ", "bob", "Carol"]);
    }

    #[test]
    fn test_remove_duplicates_matches_nan_and_signed_zero() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::Number(f64::NAN), CellValue::Number(0.0)],
            vec![CellValue::Number(f64::NAN), CellValue::Number(-0.0)],
            vec![CellValue::Number(f64::NAN), CellValue::text("0")],
        ]);
        let deduped = apply_cleanup(&grid, &CleanupOp::RemoveDuplicates).unwrap();
        assert_eq!(deduped.row_count(), 2);
        assert_eq!(deduped.get(1, 1), Some(&CellValue::text("0")));
    }

    #[test]
    fn test_remove_duplicates_on_many_rows() {
        let rows: Vec<Vec<CellValue>> = (0..20_000i32)
            .map(|i| vec![CellValue::from(i % 1_000), CellValue::text("x")])
            .collect();
        let deduped = apply_cleanup(&Grid::from_rows(rows), &CleanupOp::RemoveDuplicates).unwrap();
        assert_eq!(deduped.row_count(), 1_000);
        assert_eq!(deduped.get(999, 0), Some(&CellValue::Number(999.0)));
    }

    #[test]
    fn test_find_and_replace() {
        let grid = Grid::from_rows(vec![vec!["cat", "concat"], vec!["dog", "7"]]);
        let op = CleanupOp::find_and_replace("cat", "cow");
        let replaced = apply_cleanup(&grid, &op).unwrap();
        assert_eq!(replaced.get(0, 0), Some(&CellValue::text("cow")));
        assert_eq!(replaced.get(0, 1), Some(&CellValue::text("concow")));
        assert_eq!(replaced.get(1, 0), Some(&CellValue::text("dog")));
    }

    #[test]
    fn test_find_and_replace_requires_both_texts() {
        let grid = Grid::from_rows(vec![vec!["abc"]]);
        let unchanged = apply_cleanup(&grid, &CleanupOp::find_and_replace("a", "")).unwrap();
        assert_eq!(unchanged, grid);
        let unchanged = apply_cleanup(&grid, &CleanupOp::find_and_replace("", "z")).unwrap();
        assert_eq!(unchanged, grid);
    }

    #[test]
    fn test_find_and_replace_rejects_bad_pattern() {
        let grid = Grid::from_rows(vec![vec!["abc"]]);
        let result = apply_cleanup(&grid, &CleanupOp::find_and_replace("(", "x"));
        assert!(matches!(result, Err(EvalError::InvalidPattern(_))));
    }

    #[test]
    fn test_parse_names() {
        for name in CleanupOp::NAMES {
            let op: CleanupOp = name.to_lowercase().parse().unwrap();
            assert_eq!(op.name(), name);
        }
        assert!(matches!(
            "SORT".parse::<CleanupOp>(),
            Err(EvalError::UnsupportedOperation(_))
        ));
    }
}
