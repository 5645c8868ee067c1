//! Spreadsheet reader - first worksheet, column A → phone entries

use crate::error::{ScanError, ScanResult};
use crate::types::PhoneEntry;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveTime;
use std::path::Path;
use tracing::debug;

/// File extensions the reader accepts
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// True when the path ends in one of [`SPREADSHEET_EXTENSIONS`]
pub fn has_spreadsheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// An opened workbook, holding the used range of its first worksheet
pub struct WorkbookReader {
    sheet_name: String,
    range: Range<Data>,
}

impl WorkbookReader {
    /// Open the workbook and load its first worksheet
    pub fn open<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ScanError::Workbook("Workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ScanError::Workbook("Workbook has no worksheets".to_string()))??;

        debug!(
            file = %path.display(),
            sheet = %sheet_name,
            rows = range.height(),
            "opened workbook"
        );

        Ok(Self { sheet_name, range })
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Column-A entries below the header row, blank cells skipped.
    ///
    /// Row numbers are the sheet's own 1-based numbers.
    pub fn entries(&self) -> Vec<PhoneEntry> {
        let (Some((first_row, _)), Some((last_row, _))) = (self.range.start(), self.range.end())
        else {
            return Vec::new();
        };

        // First used row is the header
        ((first_row + 1)..=last_row)
            .filter_map(|row| {
                let text = self
                    .range
                    .get_value((row, 0))
                    .map(cell_to_text)
                    .unwrap_or_default();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(PhoneEntry::new(row + 1, text))
                }
            })
            .collect()
    }
}

/// Open `path` and return its phone entries
pub fn read_entries<P: AsRef<Path>>(path: P) -> ScanResult<Vec<PhoneEntry>> {
    Ok(WorkbookReader::open(path)?.entries())
}

/// Text form of a cell, the way it would be shown for a general-format cell
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_text(*f),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => datetime_to_text(dt),
        Data::Error(e) => e.to_string(),
    }
}

fn datetime_to_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return float_to_text(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(value) if value.time() == NaiveTime::MIN => value.format("%Y-%m-%d").to_string(),
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => float_to_text(dt.as_f64()),
    }
}

fn float_to_text(f: f64) -> String {
    // Phone numbers typed into a numeric cell arrive as floats
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    #[test]
    fn test_cell_to_text_integral_float() {
        assert_eq!(cell_to_text(&Data::Float(201012345678.0)), "201012345678");
        assert_eq!(cell_to_text(&Data::Float(1012345678.0)), "1012345678");
    }

    #[test]
    fn test_cell_to_text_fractional_float() {
        assert_eq!(cell_to_text(&Data::Float(12.5)), "12.5");
    }

    #[test]
    fn test_cell_to_text_other_kinds() {
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
        assert_eq!(cell_to_text(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(
            cell_to_text(&Data::String(" +201012345678 ".to_string())),
            " +201012345678 "
        );
    }

    #[test]
    fn test_cell_to_text_dates() {
        let date = ExcelDateTime::new(45000.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_text(&Data::DateTime(date)), "2023-03-15");

        let stamp = ExcelDateTime::new(45943.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_text(&Data::DateTime(stamp)), "2025-10-13 12:00:00");

        let duration = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(cell_to_text(&Data::DateTime(duration)), "1.5");
    }

    #[test]
    fn test_spreadsheet_extensions() {
        assert!(has_spreadsheet_extension(Path::new("numbers.xlsx")));
        assert!(has_spreadsheet_extension(Path::new("NUMBERS.XLS")));
        assert!(has_spreadsheet_extension(Path::new("dir/book.ods")));
        assert!(!has_spreadsheet_extension(Path::new("numbers.csv")));
        assert!(!has_spreadsheet_extension(Path::new("numbers")));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let err = WorkbookReader::open("definitely/not/here.xlsx")
            .err()
            .unwrap();
        assert!(err.is_io(), "expected IO error, got {err:?}");
    }
}
