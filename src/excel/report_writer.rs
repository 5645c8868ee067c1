//! Invalid-entry report export (.xlsx)

use crate::error::{ScanError, ScanResult};
use crate::types::{InvalidRecord, ScanSummary};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub const REPORT_SHEET_NAME: &str = "Invalid numbers";

/// Writes invalid records to a single-sheet workbook
pub struct InvalidReportWriter<'a> {
    records: &'a [InvalidRecord],
    summary: &'a ScanSummary,
}

impl<'a> InvalidReportWriter<'a> {
    pub fn new(records: &'a [InvalidRecord], summary: &'a ScanSummary) -> Self {
        Self { records, summary }
    }

    pub fn save(&self, output: &Path) -> ScanResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(REPORT_SHEET_NAME)
            .map_err(|e| ScanError::Export(e.to_string()))?;

        worksheet.set_column_width(0, 8).ok();
        worksheet.set_column_width(1, 22).ok();
        worksheet.set_column_width(2, 45).ok();

        let header_format = Format::new().set_bold();
        for (col, title) in ["Row", "Number", "Failed criteria"].iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *title, &header_format)
                .map_err(|e| ScanError::Export(e.to_string()))?;
        }

        for (i, record) in self.records.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet
                .write_number(row, 0, record.row)
                .and_then(|ws| ws.write_string(row, 1, &record.number))
                .and_then(|ws| ws.write_string(row, 2, record.failed_criteria.join("; ")))
                .map_err(|e| ScanError::Export(e.to_string()))?;
        }

        let meta_row = (self.records.len() + 2) as u32;
        worksheet
            .write_string(
                meta_row,
                0,
                format!(
                    "{} of {} numbers invalid",
                    self.summary.invalid, self.summary.total
                ),
            )
            .ok();

        workbook
            .save(output)
            .map_err(|e| ScanError::Export(e.to_string()))?;

        Ok(())
    }
}
