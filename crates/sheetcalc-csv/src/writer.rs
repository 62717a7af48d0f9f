//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use sheetcalc_core::Grid;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write(grid, file, options)?;
        tracing::info!(
            path = %path.display(),
            rows = grid.row_count(),
            cols = grid.col_count(),
            "saved csv"
        );
        Ok(())
    }

    /// Write a grid to a writer
    ///
    /// Cells are written as their display text with no type marker, so
    /// numeric-looking `Text` reads back as a `Number`.
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(grid.column_labels())?;
        }

        for row in grid.rows() {
            let record: Vec<String> = row.iter().map(ToString::to_string).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
