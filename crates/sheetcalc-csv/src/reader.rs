//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetcalc_core::{CellValue, Grid};
use sheetcalc_eval::coerce::parse_numeric_text;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let grid = Self::read(file, options)?;
        tracing::info!(
            path = %path.display(),
            rows = grid.row_count(),
            cols = grid.col_count(),
            "loaded csv"
        );
        Ok(grid)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Records of different lengths are accepted; short rows are padded
    /// with empty cells.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<Vec<CellValue>> = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            let is_header = options.has_header && index == 0;

            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types && !is_header {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::text(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Grid::from_rows(rows))
    }

    /// Detect the type of a field value
    ///
    /// - empty field -> `Empty`
    /// - plain decimal literal -> `Number`, unless it has leading zeros
    ///   like "007", which are kept as text
    /// - anything else -> `Text`, verbatim
    fn detect_type(field: &str) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        let trimmed = field.trim();
        let digits = trimmed.trim_start_matches(['+', '-']);
        let leading_zero = digits.len() > 1
            && digits.starts_with('0')
            && digits.as_bytes().get(1).is_some_and(u8::is_ascii_digit);

        match parse_numeric_text(trimmed) {
            Some(n) if !leading_zero => CellValue::Number(n),
            _ => CellValue::text(field),
        }
    }
}
