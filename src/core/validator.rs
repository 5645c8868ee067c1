//! MSISDN format validation
//!
//! A value is valid when, after trimming and removing inner spaces, it matches
//! any one of the fixed [`MsisdnFormat`] layouts. Nothing else is normalized:
//! hyphens, dots and parentheses all fail.

use crate::error::{ScanError, ScanResult};
use crate::types::{MsisdnFormat, ValidationResult};
use regex::RegexSet;

/// Reason reported for null, empty or whitespace-only input
pub const NULL_OR_EMPTY: &str = "Null or empty";

/// Reason reported when no layout matches
pub const NO_FORMAT_MATCH: &str = "Does not match any allowed MSISDN format";

/// Egyptian mobile carrier blocks
const EGYPT_MOBILE_PREFIX: &str = "(?:10|11|12|15)";

impl MsisdnFormat {
    /// Anchored pattern for this layout
    pub fn pattern(&self) -> String {
        let p = EGYPT_MOBILE_PREFIX;
        match self {
            MsisdnFormat::EgyptDoubleZero => format!(r"^0020{p}[0-9]{{8}}$"),
            MsisdnFormat::EgyptPlus => format!(r"^\+20{p}[0-9]{{8}}$"),
            MsisdnFormat::EgyptBare => format!(r"^20{p}[0-9]{{8}}$"),
            MsisdnFormat::EgyptDomestic => format!(r"^0{p}[0-9]{{8}}$"),
            MsisdnFormat::EgyptSubscriber => format!(r"^{p}[0-9]{{8}}$"),
            MsisdnFormat::InternationalDoubleZero => r"^00[1-9][0-9]{5,14}$".to_string(),
            MsisdnFormat::InternationalPlus => r"^\+[1-9][0-9]{5,14}$".to_string(),
        }
    }
}

/// Validator over the fixed MSISDN layouts.
///
/// Holds only compiled patterns, so one instance is shared by every worker.
#[derive(Debug, Clone)]
pub struct MsisdnValidator {
    patterns: RegexSet,
}

impl MsisdnValidator {
    /// Compile the format patterns
    pub fn new() -> ScanResult<Self> {
        let patterns = RegexSet::new(MsisdnFormat::ALL.iter().map(MsisdnFormat::pattern))
            .map_err(|e| ScanError::Config(format!("Invalid MSISDN pattern: {}", e)))?;
        Ok(Self { patterns })
    }

    /// Validate a raw cell value
    pub fn validate(&self, raw: &str) -> ValidationResult {
        if raw.trim().is_empty() {
            return ValidationResult::invalid(NULL_OR_EMPTY);
        }

        let number = normalize(raw);
        match self.patterns.matches(&number).iter().next() {
            Some(idx) => ValidationResult::valid(MsisdnFormat::ALL[idx]),
            None => ValidationResult::invalid(NO_FORMAT_MATCH),
        }
    }

    /// Validate a value that may be missing altogether
    pub fn validate_cell(&self, raw: Option<&str>) -> ValidationResult {
        self.validate(raw.unwrap_or_default())
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_valid
    }
}

/// Trim surrounding whitespace and drop inner ASCII spaces
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(' ', "")
}
