//! Tests for opening and saving sheets as CSV

use sheetcalc::prelude::*;
use sheetcalc::LineTerminator;
use tempfile::tempdir;

/// Test that a saved sheet reopens with the same cells
#[test]
fn test_save_and_open_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");

    let mut sheet = Spreadsheet::new();
    sheet.set_cell("A1", "Name").unwrap();
    sheet.set_cell("B1", "Age").unwrap();
    sheet.set_cell("A2", "Alice, Jr.").unwrap();
    sheet.set_cell("B2", 30).unwrap();
    sheet.set_cell("C2", 2.5).unwrap();
    sheet.save(&path).unwrap();

    let reopened = Spreadsheet::open(&path).unwrap();
    assert_eq!(reopened.grid(), sheet.grid());
    assert_eq!(reopened.aggregate("SUM", "A1", "E5"), Ok(32.5));
}

/// Test that numeric-looking text reopens as numbers with the same totals
#[test]
fn test_numeric_text_reopens_as_numbers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typed.csv");

    let mut sheet = Spreadsheet::new();
    sheet.set_cell("A1", "1").unwrap();
    sheet.set_cell("A2", " 5 ").unwrap();
    sheet.set_cell("A3", "007").unwrap();
    sheet.save(&path).unwrap();

    let reopened = Spreadsheet::open(&path).unwrap();
    assert_eq!(reopened.grid().get(0, 0), Some(&CellValue::Number(1.0)));
    assert_eq!(reopened.grid().get(1, 0), Some(&CellValue::Number(5.0)));
    assert_eq!(reopened.grid().get(2, 0), Some(&CellValue::text("007")));
    assert_eq!(
        reopened.aggregate("SUM", "A1", "A5"),
        sheet.aggregate("SUM", "A1", "A5")
    );
}

/// Test that the extension is matched case-insensitively
#[test]
fn test_uppercase_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("DATA.CSV");

    Spreadsheet::new().save(&path).unwrap();
    let reopened = Spreadsheet::open(&path).unwrap();
    assert_eq!(reopened.grid().shape(), (5, 5));
}

/// Test reading with a custom delimiter and a header row
#[test]
fn test_read_with_options() {
    let input = "id;total\n1;10\n2;\n";
    let options = CsvReadOptions {
        delimiter: b';',
        has_header: true,
        ..Default::default()
    };
    let grid = CsvReader::read(input.as_bytes(), &options).unwrap();
    assert_eq!(grid.shape(), (3, 2));
    assert_eq!(grid.get(0, 1), Some(&CellValue::text("total")));
    assert_eq!(grid.get(2, 1), Some(&CellValue::Empty));

    let sheet = Spreadsheet::from_grid(grid);
    let totals = sheet.column_totals();
    assert_eq!(totals[1].label, "B");
    assert_eq!(totals[1].total, 10.0);
}

/// Test writing with a header row and CRLF line endings
#[test]
fn test_write_with_options() {
    let grid = Grid::from_rows(vec![vec![CellValue::from(1), "a".into()]]);
    let options = CsvWriteOptions {
        write_header: true,
        line_terminator: LineTerminator::CRLF,
        ..Default::default()
    };
    let mut out = Vec::new();
    CsvWriter::write(&grid, &mut out, &options).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "A,B\r\n1,a\r\n");
}

/// Test cleaning a loaded file and saving the result
#[test]
fn test_clean_then_save() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    std::fs::write(&input, "  bob ,1\n  bob ,1\ncarol,2\n").unwrap();

    let mut sheet = Spreadsheet::open(&input).unwrap();
    sheet.clean(&CleanupOp::RemoveDuplicates).unwrap();
    sheet.clean(&CleanupOp::Trim).unwrap();
    sheet.clean(&CleanupOp::Upper).unwrap();
    sheet.save(&output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "BOB,1\nCAROL,2\n");
}

/// Test that non-CSV files are rejected
#[test]
fn test_unsupported_format() {
    let err = Spreadsheet::open("report.xlsx").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(err.to_string().contains("report.xlsx"));
}
