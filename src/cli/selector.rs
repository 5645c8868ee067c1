//! Input file selection
//!
//! The run command only sees [`FileSelector`], so the scan can be driven by
//! a path from the command line or by an interactive prompt.

use crate::error::ScanResult;
use crate::excel::{has_spreadsheet_extension, SPREADSHEET_EXTENSIONS};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::path::PathBuf;

/// Result of asking for an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(PathBuf),
    Cancelled,
}

pub trait FileSelector {
    fn select(&mut self) -> ScanResult<Selection>;

    /// Whether a human is on the other end
    fn is_interactive(&self) -> bool {
        false
    }
}

/// A path fixed up front (command-line argument)
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl FileSelector for FixedPath {
    fn select(&mut self) -> ScanResult<Selection> {
        Ok(Selection::Selected(self.0.clone()))
    }
}

/// Prompts for a path, accepting only spreadsheet extensions.
///
/// An empty answer or end of input cancels.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl PromptSelector<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> FileSelector for PromptSelector<R, W> {
    fn select(&mut self) -> ScanResult<Selection> {
        let filter = SPREADSHEET_EXTENSIONS
            .iter()
            .map(|e| format!("*.{e}"))
            .collect::<Vec<_>>()
            .join(";");

        loop {
            write!(
                self.output,
                "Select the Excel file to scan [{}] (empty to cancel): ",
                filter
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Selection::Cancelled);
            }

            // Terminals quote dragged-in paths
            let answer = line.trim().trim_matches(|c| c == '"' || c == '\'');
            if answer.is_empty() {
                return Ok(Selection::Cancelled);
            }

            let path = PathBuf::from(answer);
            if has_spreadsheet_extension(&path) {
                return Ok(Selection::Selected(path));
            }
            writeln!(self.output, "Not a spreadsheet file: {}", answer)?;
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
