//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AB12")
///
/// Columns are labelled with bijective base-26 letters (A-Z, AA-AZ, ...) and
/// rows with 1-based numbers. Internally both are stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ..., AA=26)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// This is a purely structural parse: it does not know about any grid,
    /// so no bounds are applied beyond what fits in `usize`.
    ///
    /// # Examples
    /// ```
    /// use sheetcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("ab12").unwrap();
    /// assert_eq!(addr.row, 11);
    /// assert_eq!(addr.col, 27);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (letters, digits) = Self::split(s)
            .ok_or_else(|| Error::InvalidAddress(format!("'{}' is not of the form A1", s)))?;

        let col = Self::letters_to_column(letters).ok_or_else(|| {
            Error::InvalidAddress(format!("column letters '{}' are too long", letters))
        })?;

        let row: usize = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based externally
        let row = row
            .checked_sub(1)
            .ok_or_else(|| Error::InvalidAddress(format!("row number must be >= 1 in '{}'", s)))?;

        Ok(Self { row, col })
    }

    /// Split trimmed `s` into its letter prefix and digit suffix.
    ///
    /// Returns `None` unless the whole string is `[A-Za-z]+[0-9]+`.
    pub fn split(s: &str) -> Option<(&str, &str)> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_alphabetic())?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some((letters, digits))
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;

        while n > 0 {
            n -= 1;
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    ///
    /// Case-insensitive. Returns `None` for an empty string, a non-letter
    /// character, or a label too long to fit in `usize`.
    pub fn letters_to_column(letters: &str) -> Option<usize> {
        if letters.is_empty() {
            return None;
        }

        let mut acc: usize = 0;
        for c in letters.bytes() {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let digit = (c.to_ascii_uppercase() - b'A') as usize + 1;
            acc = acc.checked_mul(26)?.checked_add(digit)?;
        }

        Some(acc - 1)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row as u128 + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
///
/// Always normalized: `start` is the top-left corner and `end` the
/// bottom-right one, whatever order the corners were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range from any two corners
    ///
    /// Rows and columns are ordered independently, so `B1` / `A3` yields
    /// `A1:B3`.
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation (or a single address)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => {
                let start = CellAddress::parse(start)?;
                let end = CellAddress::parse(end)?;
                Ok(Self::new(start, end))
            }
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> usize {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            remaining: self.cell_count() as usize,
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start, self.end)
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: usize,
    current_col: usize,
    remaining: usize,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);
        self.remaining -= 1;

        if self.current_col == self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        } else {
            self.current_col += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(27), "AB");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
        assert_eq!(CellAddress::column_to_letters(702), "AAA");
    }

    #[test]
    fn test_column_to_letters_handles_max_usize() {
        let letters = CellAddress::column_to_letters(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellAddress::letters_to_column("A"), Some(0));
        assert_eq!(CellAddress::letters_to_column("Z"), Some(25));
        assert_eq!(CellAddress::letters_to_column("AA"), Some(26));
        assert_eq!(CellAddress::letters_to_column("ZZ"), Some(701));
        assert_eq!(CellAddress::letters_to_column("aaa"), Some(702));
        assert_eq!(CellAddress::letters_to_column(""), None);
        assert_eq!(CellAddress::letters_to_column("A1"), None);
        assert_eq!(CellAddress::letters_to_column(&"Z".repeat(40)), None);
    }

    #[test]
    fn test_split() {
        assert_eq!(CellAddress::split("B12"), Some(("B", "12")));
        assert_eq!(CellAddress::split("  aa7 "), Some(("aa", "7")));
        assert_eq!(CellAddress::split("12"), None);
        assert_eq!(CellAddress::split("B"), None);
        assert_eq!(CellAddress::split("B1C"), None);
        assert_eq!(CellAddress::split("$B$1"), None);
        assert_eq!(CellAddress::split(""), None);
    }

    #[test]
    fn test_cell_address_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(0, 0));
        assert_eq!(CellAddress::parse("B2").unwrap(), CellAddress::new(1, 1));
        assert_eq!(CellAddress::parse("c10").unwrap(), CellAddress::new(9, 2));

        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A-1").is_err());
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::new(0, 26).to_string(), "AA1");
    }

    #[test]
    fn test_range_normalizes_each_axis_independently() {
        // B1 / A3: columns reversed, rows in order
        let range = CellRange::new(CellAddress::new(0, 1), CellAddress::new(2, 0));
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(2, 1));

        // A3 / B1: rows reversed, columns in order
        let range = CellRange::new(CellAddress::new(2, 0), CellAddress::new(0, 1));
        assert_eq!(range.to_string(), "A1:B3");
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(1, 1));

        let range = CellRange::parse("C3").unwrap();
        assert_eq!(range.start, range.end);
        assert_eq!(range.cell_count(), 1);
    }

    #[test]
    fn test_cell_range_contains() {
        let range = CellRange::parse("B2:D4").unwrap();
        assert!(range.contains(&CellAddress::new(1, 1)));
        assert!(range.contains(&CellAddress::new(3, 3)));
        assert!(!range.contains(&CellAddress::new(0, 0)));
        assert!(!range.contains(&CellAddress::new(4, 1)));
    }

    #[test]
    fn test_cell_range_iterator() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 0),
                CellAddress::new(0, 1),
                CellAddress::new(1, 0),
                CellAddress::new(1, 1),
            ]
        );
        assert_eq!(range.cells().len(), 4);
    }
}
