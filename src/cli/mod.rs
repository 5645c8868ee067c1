//! CLI command handlers

pub mod commands;
pub mod selector;

pub use commands::{exit_code, read_failure_message, scan, wait_for_keypress, RunStatus};
pub use selector::{FileSelector, FixedPath, PromptSelector, Selection};
