//! Scan log: buffered and immediate timestamped lines
//!
//! Workers append to an in-memory buffer while the scan runs; the buffer is
//! written to the log file and echoed to the console once, after the parallel
//! phase has joined. Fatal conditions before the scan bypass the buffer.

use crate::error::ScanResult;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "scan.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single timestamped log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogLine {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Per-run log context, shared by reference with every worker
#[derive(Debug)]
pub struct ScanLog {
    path: PathBuf,
    echo: bool,
    buffer: Mutex<Vec<LogLine>>,
    flushed: AtomicBool,
}

impl ScanLog {
    /// Create the log, truncating any file left by a previous run
    pub fn create<P: AsRef<Path>>(path: P, echo: bool) -> ScanResult<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        debug!(log_file = %path.display(), "scan log reset");

        Ok(Self {
            path,
            echo,
            buffer: Mutex::new(Vec::new()),
            flushed: AtomicBool::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Queue a line for the end-of-run flush
    pub fn buffered(&self, message: impl Into<String>) {
        let line = LogLine::now(message);
        debug!(target: "msisdn_scan::scan_log", "{}", line.message);
        self.lock().push(line);
    }

    /// Write a line to the log file and console right away.
    ///
    /// Printed to stderr when the echo is off.
    pub fn immediate(&self, message: impl Into<String>) -> ScanResult<()> {
        let line = LogLine::now(message);
        info!(target: "msisdn_scan::scan_log", "{}", line.message);

        if self.echo {
            println!("{}", line.message);
        } else {
            eprintln!("{}", line.message);
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Write every buffered line to the log file, then echo them.
    ///
    /// Only the first call writes anything; later calls return 0.
    pub fn flush(&self) -> ScanResult<usize> {
        if self.flushed.swap(true, Ordering::SeqCst) {
            return Ok(0);
        }

        let lines = std::mem::take(&mut *self.lock());
        let mut contents = String::new();
        for line in &lines {
            contents.push_str(&line.to_string());
            contents.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(contents.as_bytes())?;

        if self.echo {
            print!("{}", contents);
        }

        Ok(lines.len())
    }

    /// Snapshot of the lines buffered so far
    pub fn buffered_lines(&self) -> Vec<LogLine> {
        self.lock().clone()
    }

    /// Messages buffered so far, without timestamps
    pub fn buffered_messages(&self) -> Vec<String> {
        self.lock().iter().map(|l| l.message.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogLine>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
