//! Run configuration

use crate::error::{ScanError, ScanResult};
use crate::report::DEFAULT_LOG_FILE;
use std::path::PathBuf;

/// Default worker ceiling for the validation fan-out
pub const DEFAULT_MAX_WORKERS: usize = 16;

/// What goes to stdout once the scan is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Echo the scan log and print a verdict line
    #[default]
    Text,
    /// Print the scan report as JSON only
    Json,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of concurrent validation workers
    pub max_workers: usize,
    /// Log file, truncated at the start of every run
    pub log_file: PathBuf,
    /// Wait for Enter before exiting
    pub pause: bool,
    /// Echo log lines to the console
    pub echo: bool,
    pub output: OutputMode,
    /// Optional .xlsx export of the invalid entries
    pub report_file: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            pause: false,
            echo: true,
            output: OutputMode::Text,
            report_file: None,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> ScanResult<()> {
        if self.max_workers == 0 {
            return Err(ScanError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if let Some(report) = &self.report_file {
            let is_xlsx = report
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
            if !is_xlsx {
                return Err(ScanError::Config(format!(
                    "report file must end in .xlsx: {}",
                    report.display()
                )));
            }
        }
        Ok(())
    }
}
