//! msisdn-scan - MSISDN validation for spreadsheet phone-number columns
//!
//! Reads column A of the first worksheet (row 1 is a header), checks every
//! number against a fixed set of MSISDN layouts on a bounded worker pool and
//! reports the invalid entries through a buffered scan log.
//!
//! # Accepted layouts
//!
//! - Egyptian mobile (prefix 10, 11, 12 or 15 followed by 8 digits) as
//!   `0020…`, `+20…`, `20…`, `0…` or the bare 10-digit subscriber number
//! - International numbers as `00` or `+`, a nonzero digit and 5 to 14 more
//!   digits
//!
//! # Example
//!
//! ```no_run
//! use msisdn_scan::config::ScanConfig;
//! use msisdn_scan::core::{MsisdnValidator, Scanner};
//! use msisdn_scan::report::ScanLog;
//! use std::path::Path;
//!
//! let config = ScanConfig::default();
//! let log = ScanLog::create(&config.log_file, true)?;
//! let scanner = Scanner::new(MsisdnValidator::new()?, &config)?;
//!
//! let report = scanner.scan_file(Path::new("numbers.xlsx"), &log)?;
//! log.flush()?;
//! println!("{} of {} invalid", report.summary.invalid, report.summary.total);
//! # Ok::<(), msisdn_scan::error::ScanError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{ScanError, ScanResult};
pub use types::{InvalidRecord, MsisdnFormat, PhoneEntry, ScanReport, ScanSummary, ValidationResult};
