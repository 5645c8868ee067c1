//! Excel input and output
//!
//! - Read: first worksheet, column A → phone entries
//! - Write: invalid-entry report (.xlsx)

mod reader;
mod report_writer;

pub use reader::{
    cell_to_text, has_spreadsheet_extension, read_entries, WorkbookReader, SPREADSHEET_EXTENSIONS,
};
pub use report_writer::{InvalidReportWriter, REPORT_SHEET_NAME};
