use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

//==============================================================================
// Input
//==============================================================================

/// One non-blank phone-number cell read from the worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// 1-based spreadsheet row number (header offset and blank rows preserved)
    pub row: u32,
    /// Cell text exactly as read
    pub number: String,
}

impl PhoneEntry {
    pub fn new(row: u32, number: impl Into<String>) -> Self {
        Self {
            row,
            number: number.into(),
        }
    }
}

//==============================================================================
// Validation
//==============================================================================

/// The accepted MSISDN layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsisdnFormat {
    /// 0020 + mobile prefix + 8 digits
    EgyptDoubleZero,
    /// +20 + mobile prefix + 8 digits
    EgyptPlus,
    /// 20 + mobile prefix + 8 digits
    EgyptBare,
    /// 0 + mobile prefix + 8 digits
    EgyptDomestic,
    /// mobile prefix + 8 digits
    EgyptSubscriber,
    /// 00 + international number
    InternationalDoubleZero,
    /// + + international number
    InternationalPlus,
}

impl MsisdnFormat {
    pub const ALL: [MsisdnFormat; 7] = [
        MsisdnFormat::EgyptDoubleZero,
        MsisdnFormat::EgyptPlus,
        MsisdnFormat::EgyptBare,
        MsisdnFormat::EgyptDomestic,
        MsisdnFormat::EgyptSubscriber,
        MsisdnFormat::InternationalDoubleZero,
        MsisdnFormat::InternationalPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MsisdnFormat::EgyptDoubleZero => "Egypt mobile (0020)",
            MsisdnFormat::EgyptPlus => "Egypt mobile (+20)",
            MsisdnFormat::EgyptBare => "Egypt mobile (20)",
            MsisdnFormat::EgyptDomestic => "Egypt mobile (domestic 0)",
            MsisdnFormat::EgyptSubscriber => "Egypt mobile (subscriber, 10 digits)",
            MsisdnFormat::InternationalDoubleZero => "International (00)",
            MsisdnFormat::InternationalPlus => "International (+)",
        }
    }
}

impl fmt::Display for MsisdnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of validating a single raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable reasons, empty when valid
    pub failed_criteria: Vec<String>,
    /// First format (in declaration order) the value matched
    pub matched: Option<MsisdnFormat>,
}

impl ValidationResult {
    pub fn valid(format: MsisdnFormat) -> Self {
        Self {
            is_valid: true,
            failed_criteria: Vec::new(),
            matched: Some(format),
        }
    }

    pub fn invalid(reason: &str) -> Self {
        Self {
            is_valid: false,
            failed_criteria: vec![reason.to_string()],
            matched: None,
        }
    }

    /// Reasons joined the way they appear in the scan log
    pub fn criteria_text(&self) -> String {
        self.failed_criteria.join("; ")
    }
}

/// An entry that failed validation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvalidRecord {
    pub row: u32,
    pub number: String,
    pub failed_criteria: Vec<String>,
}

//==============================================================================
// Scan results
//==============================================================================

/// How a completed scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ScanOutcome {
    /// Every entry matched an allowed format
    Succeeded,
    /// The worksheet held no phone numbers at all
    NoData,
    /// At least one entry was invalid
    Failed { invalid: usize },
}

/// Counters derived from a finished scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total: usize,
    pub invalid: usize,
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn outcome(&self) -> ScanOutcome {
        if self.invalid > 0 {
            ScanOutcome::Failed {
                invalid: self.invalid,
            }
        } else if self.total == 0 {
            ScanOutcome::NoData
        } else {
            ScanOutcome::Succeeded
        }
    }
}

/// Everything a scan produced, invalid records sorted by row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub outcome: ScanOutcome,
    pub invalid_records: Vec<InvalidRecord>,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Format a duration as `HH:MM:SS.ffffff`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:06}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        elapsed.subsec_micros()
    )
}
