//! Resolution of spreadsheet-style address text into grid ranges
//!
//! The resolver is a pure function of the address text and the grid's
//! current shape. It never looks at cell contents.
//!
//! When an address is outside the grid on both axes the column is reported:
//! columns are checked before rows, so `Z99` on a 5×5 grid yields
//! [`AddressError::ColumnOutOfRange`].

use sheetcalc_core::{CellAddress, CellRange, Grid};

use crate::error::AddressError;

/// The (rows, columns) dimensions a range is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The current shape of `grid`
    pub fn of(grid: &Grid) -> Self {
        let (rows, cols) = grid.shape();
        Self { rows, cols }
    }

    /// Check that `addr` lies inside this shape, column first
    pub fn check(&self, addr: CellAddress) -> Result<(), AddressError> {
        if addr.col >= self.cols {
            return Err(AddressError::ColumnOutOfRange {
                address: addr.to_string(),
                cols: self.cols,
            });
        }
        if addr.row >= self.rows {
            return Err(AddressError::RowOutOfRange {
                address: addr.to_string(),
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Check both corners of `range`
    pub fn check_range(&self, range: &CellRange) -> Result<(), AddressError> {
        self.check(range.start)?;
        self.check(range.end)
    }
}

impl From<(usize, usize)> for GridShape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// Turns address text into normalized ranges bounded by a grid shape
pub struct RangeAddressResolver;

impl RangeAddressResolver {
    /// Resolve a pair of corner addresses into a normalized range
    ///
    /// The corners may be given in any order; rows and columns are sorted
    /// independently.
    ///
    /// # Examples
    /// ```
    /// use sheetcalc_eval::{GridShape, RangeAddressResolver};
    ///
    /// let shape = GridShape::new(5, 5);
    /// let range = RangeAddressResolver::resolve(shape, "B5", "A2").unwrap();
    /// assert_eq!(range.to_string(), "A2:B5");
    /// ```
    pub fn resolve(
        shape: GridShape,
        start_text: &str,
        end_text: &str,
    ) -> Result<CellRange, AddressError> {
        let start = Self::resolve_cell(shape, start_text)?;
        let end = Self::resolve_cell(shape, end_text)?;
        let range = CellRange::new(start, end);
        tracing::trace!(start_text, end_text, %range, "resolved range");
        Ok(range)
    }

    /// Resolve `"A1:C4"` (or a single `"B2"`) into a normalized range
    pub fn resolve_range(shape: GridShape, text: &str) -> Result<CellRange, AddressError> {
        let mut parts = text.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(single), None, None) => {
                Self::resolve_cell(shape, single).map(CellRange::single)
            }
            (Some(start), Some(end), None) => Self::resolve(shape, start, end),
            _ => Err(AddressError::MalformedAddress(text.trim().to_string())),
        }
    }

    /// Resolve a single address such as `"B2"` or `"aa10"`
    pub fn resolve_cell(shape: GridShape, text: &str) -> Result<CellAddress, AddressError> {
        let text = text.trim();
        let malformed = || AddressError::MalformedAddress(text.to_string());

        let (letters, digits) = CellAddress::split(text).ok_or_else(malformed)?;

        // Row 0 does not exist in 1-based notation, however many zeros
        if digits.bytes().all(|b| b == b'0') {
            return Err(malformed());
        }

        let label = text.to_ascii_uppercase();

        // A label too long for usize is necessarily wider than any grid
        let col = CellAddress::letters_to_column(letters).ok_or_else(|| {
            AddressError::ColumnOutOfRange {
                address: label.clone(),
                cols: shape.cols,
            }
        })?;
        if col >= shape.cols {
            return Err(AddressError::ColumnOutOfRange {
                address: label,
                cols: shape.cols,
            });
        }

        // Likewise a row number that overflows usize
        let row = digits
            .parse::<usize>()
            .ok()
            .map(|n| n - 1)
            .filter(|row| *row < shape.rows)
            .ok_or_else(|| AddressError::RowOutOfRange {
                address: label,
                rows: shape.rows,
            })?;

        Ok(CellAddress::new(row, col))
    }
}
