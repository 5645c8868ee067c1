//! Spreadsheet reader tests
//!
//! Fixture workbooks are generated with rust_xlsxwriter into temp dirs.

mod common;

use common::{text_sheet, write_numbers_sheet, Cell};
use msisdn_scan::excel::{read_entries, WorkbookReader};
use msisdn_scan::{PhoneEntry, ScanError};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_header_skipped_and_rows_numbered_from_sheet() {
    let dir = TempDir::new().unwrap();
    let path = text_sheet(&dir, "numbers.xlsx", &["201012345678", "notanumber"]);

    let entries = read_entries(&path).unwrap();
    assert_eq!(
        entries,
        vec![
            PhoneEntry::new(2, "201012345678"),
            PhoneEntry::new(3, "notanumber"),
        ]
    );
}

#[test]
fn test_blank_rows_skipped_without_renumbering() {
    let dir = TempDir::new().unwrap();
    let path = text_sheet(
        &dir,
        "gaps.xlsx",
        &["01012345678", "", "", "+201112345678", "   "],
    );

    let entries = read_entries(&path).unwrap();
    let rows: Vec<u32> = entries.iter().map(|e| e.row).collect();
    assert_eq!(rows, vec![2, 5]);
}

#[test]
fn test_numeric_cells_read_without_decimal_point() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numeric.xlsx");
    write_numbers_sheet(
        &path,
        "Phone",
        &[Cell::Number(201012345678.0), Cell::Number(1512345678.0)],
    );

    let entries = read_entries(&path).unwrap();
    assert_eq!(
        entries,
        vec![
            PhoneEntry::new(2, "201012345678"),
            PhoneEntry::new(3, "1512345678"),
        ]
    );
}

#[test]
fn test_header_only_sheet_has_no_entries() {
    let dir = TempDir::new().unwrap();
    let path = text_sheet(&dir, "header_only.xlsx", &[]);
    assert!(read_entries(&path).unwrap().is_empty());
}

#[test]
fn test_header_below_first_row() {
    // The first used row is the header even when it is not row 1
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(2, 0, "MSISDN").unwrap();
    worksheet.write_string(3, 0, "01212345678").unwrap();
    workbook.save(&path).unwrap();

    let entries = read_entries(&path).unwrap();
    assert_eq!(entries, vec![PhoneEntry::new(4, "01212345678")]);
}

#[test]
fn test_only_first_worksheet_and_column_a_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two_sheets.xlsx");
    let mut workbook = Workbook::new();

    let first = workbook.add_worksheet();
    first.set_name("Numbers").unwrap();
    first.write_string(0, 0, "MSISDN").unwrap();
    first.write_string(0, 1, "Name").unwrap();
    first.write_string(1, 0, "01012345678").unwrap();
    first.write_string(1, 1, "not a phone").unwrap();
    first.write_string(2, 1, "only column B").unwrap();

    let second = workbook.add_worksheet();
    second.write_string(0, 0, "MSISDN").unwrap();
    second.write_string(1, 0, "ignored").unwrap();
    workbook.save(&path).unwrap();

    let reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_name(), "Numbers");
    assert_eq!(reader.entries(), vec![PhoneEntry::new(2, "01012345678")]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_entries(dir.path().join("nope.xlsx")).unwrap_err();
    assert!(matches!(err, ScanError::Io(_)), "got {err:?}");
}

#[test]
fn test_unknown_format_is_workbook_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numbers.txt");
    fs::write(&path, "01012345678\n").unwrap();

    let err = read_entries(&path).unwrap_err();
    assert!(matches!(err, ScanError::Workbook(_)), "got {err:?}");
    assert!(!err.is_io());
}
