use clap::Parser;
use msisdn_scan::cli::{self, FileSelector, FixedPath, PromptSelector};
use msisdn_scan::config::{OutputMode, ScanConfig, DEFAULT_MAX_WORKERS};
use msisdn_scan::report::DEFAULT_LOG_FILE;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "msisdn-scan")]
#[command(about = "Validate a column of phone numbers in an Excel file against MSISDN formats")]
#[command(long_about = "msisdn-scan - Batch MSISDN validation for spreadsheets

Reads column A of the first worksheet (row 1 is the header), checks every
number against the allowed MSISDN formats and logs the invalid rows.

ALLOWED FORMATS:
  0020 + 10|11|12|15 + 8 digits      00201012345678
  +20  + 10|11|12|15 + 8 digits      +201012345678
  20   + 10|11|12|15 + 8 digits      201012345678
  0    + 10|11|12|15 + 8 digits      01012345678
         10|11|12|15 + 8 digits      1012345678
  00 + nonzero digit + 5-14 digits   00491512345678
  +  + nonzero digit + 5-14 digits   +491512345678

Spaces are removed before matching; any other separator fails.

EXIT CODES:
  0  all numbers valid (or no file selected)
  1  fatal error (missing file, unreadable workbook, bad options)
  2  scan completed with invalid numbers

EXAMPLES:
  msisdn-scan                          # Prompt for the file, wait for Enter at the end
  msisdn-scan numbers.xlsx             # Non-interactive
  msisdn-scan numbers.xlsx -w 4 --report invalid.xlsx
  msisdn-scan numbers.xlsx --json > result.json")]
#[command(version)]
struct Args {
    /// Spreadsheet to scan (prompts when omitted)
    file: Option<PathBuf>,

    /// Maximum number of concurrent validation workers
    #[arg(short, long, default_value_t = DEFAULT_MAX_WORKERS, env = "MSISDN_SCAN_WORKERS")]
    workers: usize,

    /// Log file, truncated at the start of every run
    #[arg(short, long, default_value = DEFAULT_LOG_FILE, env = "MSISDN_SCAN_LOG_FILE")]
    log_file: PathBuf,

    /// Never wait for Enter before exiting
    #[arg(long)]
    no_pause: bool,

    /// Do not echo the scan log to the console
    #[arg(short, long)]
    quiet: bool,

    /// Print the scan report as JSON instead of the log
    #[arg(long)]
    json: bool,

    /// Write invalid entries to this .xlsx file
    #[arg(short, long)]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msisdn_scan=warn".into()),
        )
        .init();

    let args = Args::parse();

    let mut selector: Box<dyn FileSelector> = match args.file {
        Some(path) => Box::new(FixedPath(path)),
        None => Box::new(PromptSelector::stdio()),
    };

    let output = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let config = ScanConfig {
        max_workers: args.workers,
        log_file: args.log_file,
        pause: selector.is_interactive() && !args.no_pause,
        echo: !args.quiet && output == OutputMode::Text,
        output,
        report_file: args.report,
    };

    let result = cli::scan(selector.as_mut(), &config);
    // Releases the stdin lock held by the prompt
    drop(selector);
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }

    if config.pause {
        cli::wait_for_keypress();
    }

    ExitCode::from(cli::exit_code(&result))
}
