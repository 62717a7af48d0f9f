//! Text functions applied cell by cell
//!
//! Only text cells are touched; numbers and empty cells pass through.

use regex::Regex;
use sheetcalc_core::CellValue;

fn map_text(value: &CellValue, f: impl FnOnce(&str) -> String) -> CellValue {
    match value {
        CellValue::Text(s) => CellValue::Text(f(s)),
        other => other.clone(),
    }
}

/// TRIM: strip leading and trailing whitespace (inner spacing is kept)
pub fn fn_trim(value: &CellValue) -> CellValue {
    map_text(value, |s| s.trim().to_string())
}

/// UPPER
pub fn fn_upper(value: &CellValue) -> CellValue {
    map_text(value, str::to_uppercase)
}

/// LOWER
pub fn fn_lower(value: &CellValue) -> CellValue {
    map_text(value, str::to_lowercase)
}

/// Replace every match of `pattern` with `replacement` (`$1`-style groups allowed)
pub fn fn_replace(value: &CellValue, pattern: &Regex, replacement: &str) -> CellValue {
    map_text(value, |s| pattern.replace_all(s, replacement).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_keeps_inner_whitespace() {
        assert_eq!(fn_trim(&CellValue::text("  a  b \t")), CellValue::text("a  b"));
        assert_eq!(fn_trim(&CellValue::Number(1.0)), CellValue::Number(1.0));
        assert_eq!(fn_trim(&CellValue::Empty), CellValue::Empty);
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(fn_upper(&CellValue::text("straße")), CellValue::text("STRASSE"));
        assert_eq!(fn_lower(&CellValue::text("MiXeD")), CellValue::text("mixed"));
        assert_eq!(fn_upper(&CellValue::Number(2.0)), CellValue::Number(2.0));
    }

    #[test]
    fn test_replace_uses_regex() {
        let pattern = Regex::new(r"(\d+)-(\d+)").unwrap();
        assert_eq!(
            fn_replace(&CellValue::text("10-20 and 3-4"), &pattern, "$2-$1"),
            CellValue::text("20-10 and 4-3")
        );
        assert_eq!(
            fn_replace(&CellValue::Number(10.0), &pattern, "x"),
            CellValue::Number(10.0)
        );
    }
}
