//! Common test utilities: fixture workbooks written with rust_xlsxwriter

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A column-A cell in a fixture sheet
#[allow(dead_code)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write a workbook whose first sheet has `header` in A1 and `cells` below it
#[allow(dead_code)]
pub fn write_numbers_sheet(path: &Path, header: &str, cells: &[Cell]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, header).unwrap();
    for (i, cell) in cells.iter().enumerate() {
        let row = (i + 1) as u32;
        match cell {
            Cell::Text(s) => {
                worksheet.write_string(row, 0, *s).unwrap();
            }
            Cell::Number(n) => {
                worksheet.write_number(row, 0, *n).unwrap();
            }
            Cell::Blank => {}
        }
    }
    workbook.save(path).unwrap();
}

/// Fixture with text cells only; empty strings become blank cells
#[allow(dead_code)]
pub fn text_sheet(dir: &TempDir, name: &str, numbers: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let cells: Vec<Cell> = numbers
        .iter()
        .map(|n| if n.is_empty() { Cell::Blank } else { Cell::Text(n) })
        .collect();
    write_numbers_sheet(&path, "MSISDN", &cells);
    path
}
