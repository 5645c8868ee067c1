//! Scan orchestration: read, fan out, aggregate

use crate::config::ScanConfig;
use crate::core::validator::MsisdnValidator;
use crate::error::{ScanError, ScanResult};
use crate::excel::WorkbookReader;
use crate::report::ScanLog;
use crate::types::{format_elapsed, InvalidRecord, PhoneEntry, ScanReport, ScanSummary};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the validator over every entry on a bounded worker pool
pub struct Scanner {
    validator: MsisdnValidator,
    pool: ThreadPool,
}

impl Scanner {
    /// Build a scanner with `config.max_workers` worker threads
    pub fn new(validator: MsisdnValidator, config: &ScanConfig) -> ScanResult<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.max_workers)
            .thread_name(|i| format!("msisdn-scan-{i}"))
            .build()
            .map_err(|e| ScanError::Config(format!("Failed to start worker pool: {}", e)))?;

        Ok(Self { validator, pool })
    }

    pub fn max_workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Read the first worksheet of `path` and scan it.
    ///
    /// Elapsed time covers reading as well as validation. Read failures are
    /// returned before any entry is validated.
    pub fn scan_file(&self, path: &Path, log: &ScanLog) -> ScanResult<ScanReport> {
        let started = Instant::now();

        log.buffered(format!("Starting scan of file: {}", path.display()));
        log.buffered("Opening workbook...");
        let workbook = WorkbookReader::open(path)?;
        log.buffered("Reading rows...");
        let entries = workbook.entries();
        log.buffered("Finished reading rows.");
        log.buffered(format!(
            "Loaded {} phone numbers from Excel.",
            entries.len()
        ));

        Ok(self.finish(&entries, log, started))
    }

    /// Scan entries that were already read
    pub fn run(&self, entries: &[PhoneEntry], log: &ScanLog) -> ScanReport {
        self.finish(entries, log, Instant::now())
    }

    fn finish(&self, entries: &[PhoneEntry], log: &ScanLog, started: Instant) -> ScanReport {
        let invalid_records = self.validate_all(entries, log);

        if !invalid_records.is_empty() {
            log.buffered("failed file");
            log.buffered(format!("Total invalid numbers: {}", invalid_records.len()));
        } else {
            if entries.is_empty() {
                log.buffered("No phone numbers found in worksheet");
            }
            log.buffered("succeeded file");
        }

        let summary = ScanSummary {
            total: entries.len(),
            invalid: invalid_records.len(),
            elapsed: started.elapsed(),
        };
        log.buffered(format!("Total time taken: {}", format_elapsed(summary.elapsed)));
        log.buffered("Scan complete.");

        info!(
            total = summary.total,
            invalid = summary.invalid,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "scan finished"
        );

        ScanReport {
            outcome: summary.outcome(),
            summary,
            invalid_records,
        }
    }

    /// Parallel phase. Returns once every worker is done.
    fn validate_all(&self, entries: &[PhoneEntry], log: &ScanLog) -> Vec<InvalidRecord> {
        debug!(
            entries = entries.len(),
            workers = self.max_workers(),
            "validating"
        );

        let mut invalid: Vec<InvalidRecord> = self.pool.install(|| {
            entries
                .par_iter()
                .filter_map(|entry| self.check(entry, log))
                .collect()
        });

        // Workers finish in any order
        invalid.sort();
        invalid
    }

    fn check(&self, entry: &PhoneEntry, log: &ScanLog) -> Option<InvalidRecord> {
        log.buffered(format!("Scanned row {}: {}", entry.row, entry.number));

        let result = self.validator.validate(&entry.number);
        if result.is_valid {
            return None;
        }

        log.buffered(format!(
            "Invalid number at row {}: {} | Failed criteria: {}",
            entry.row,
            entry.number,
            result.criteria_text()
        ));
        Some(InvalidRecord {
            row: entry.row,
            number: entry.number.clone(),
            failed_criteria: result.failed_criteria,
        })
    }
}
