use crate::cli::selector::{FileSelector, Selection};
use crate::config::{OutputMode, ScanConfig};
use crate::core::{MsisdnValidator, Scanner};
use crate::error::{ScanError, ScanResult};
use crate::excel::InvalidReportWriter;
use crate::report::ScanLog;
use crate::types::{format_elapsed, ScanOutcome, ScanReport};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Exit code for a scan that completed but found invalid entries
pub const EXIT_INVALID_ENTRIES: u8 = 2;

/// Exit code for fatal errors (missing file, unreadable workbook, setup)
pub const EXIT_FATAL: u8 = 1;

/// How a run ended
#[derive(Debug)]
pub enum RunStatus {
    Completed(ScanReport),
    /// No file was selected
    Cancelled,
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::Completed(report) => match report.outcome {
                ScanOutcome::Failed { .. } => EXIT_INVALID_ENTRIES,
                ScanOutcome::Succeeded | ScanOutcome::NoData => 0,
            },
            RunStatus::Cancelled => 0,
        }
    }
}

/// Map a run result to the process exit code
pub fn exit_code(result: &ScanResult<RunStatus>) -> u8 {
    match result {
        Ok(status) => status.exit_code(),
        Err(_) => EXIT_FATAL,
    }
}

/// Execute the scan: select a file, read it, validate every number, report.
///
/// Fatal conditions before the scan are written to the log immediately and
/// returned as errors. Invalid numbers are not errors; they end up in the
/// returned report.
pub fn scan(selector: &mut dyn FileSelector, config: &ScanConfig) -> ScanResult<RunStatus> {
    config.validate()?;
    let log = ScanLog::create(&config.log_file, config.echo)?;

    let path = match selector.select()? {
        Selection::Selected(path) => path,
        Selection::Cancelled => {
            log.immediate("No file selected. Exiting.")?;
            return Ok(RunStatus::Cancelled);
        }
    };

    if !path.is_file() {
        log.immediate(format!("File not found: {}", path.display()))?;
        return Err(ScanError::FileNotFound(path));
    }

    let scanner = Scanner::new(MsisdnValidator::new()?, config)?;
    info!(file = %path.display(), workers = scanner.max_workers(), "scanning");

    let report = match scanner.scan_file(&path, &log) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "workbook could not be read");
            log.immediate(read_failure_message(&err))?;
            return Err(err);
        }
    };

    log.flush()?;

    if let Some(report_file) = &config.report_file {
        InvalidReportWriter::new(&report.invalid_records, &report.summary).save(report_file)?;
        info!(report = %report_file.display(), "invalid-entry report written");
    }

    match config.output {
        OutputMode::Text => print_verdict(&report, config),
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| ScanError::Export(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(RunStatus::Completed(report))
}

/// Log line for a workbook that could not be read.
///
/// Failures to open the file itself are reported as blocked; anything wrong
/// with its contents as a read error.
pub fn read_failure_message(err: &ScanError) -> String {
    match err {
        ScanError::Io(e) => format!("Blocked from scanning. IO error: {}", e),
        ScanError::Workbook(msg) => format!("Error reading Excel file: {}", msg),
        other => format!("Error reading Excel file: {}", other),
    }
}

fn print_verdict(report: &ScanReport, config: &ScanConfig) {
    let elapsed = format_elapsed(report.summary.elapsed);
    println!();
    match report.outcome {
        ScanOutcome::Failed { invalid } => {
            println!(
                "{}",
                format!(
                    "❌ {} of {} numbers invalid ({})",
                    invalid, report.summary.total, elapsed
                )
                .bold()
                .red()
            );
            println!("   Details: {}", config.log_file.display());
            if let Some(report_file) = &config.report_file {
                println!("   Report:  {}", report_file.display());
            }
        }
        ScanOutcome::NoData => {
            println!(
                "{}",
                "⚠️  No phone numbers found in the first worksheet".yellow()
            );
        }
        ScanOutcome::Succeeded => {
            println!(
                "{}",
                format!(
                    "✅ All {} numbers valid ({})",
                    report.summary.total, elapsed
                )
                .bold()
                .green()
            );
        }
    }
}

/// Block until the user presses Enter
#[cfg(not(coverage))]
pub fn wait_for_keypress() {
    print!("Press Enter to exit...");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
}

/// Stub for coverage builds - stdin is not available
#[cfg(coverage)]
pub fn wait_for_keypress() {}
