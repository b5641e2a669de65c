use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a scan diagnostic.
///
/// Soft conditions never abort a scan; callers decide what to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSeverity {
    Info,
    Warning,
    Debug,
}

/// A structured diagnostic recorded during a scan.
///
/// Returned alongside the result instead of being written to a log, so
/// callers and tests can assert on specific conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanEvent {
    /// The region marker was found; capture begins after this line.
    RegionEntered { page: usize },
    /// A boundary line ended capture; the rest of the page is skipped.
    RegionExited { page: usize },
    /// A page yielded no text; the scan continued on later pages.
    PageTextMissing { page: usize },
    /// A row-start line did not fit the strict capture pattern and was
    /// treated as a continuation of the open record.
    RowPatternMismatch { page: usize, line: String },
}

impl ScanEvent {
    pub fn severity(&self) -> EventSeverity {
        match self {
            ScanEvent::RegionEntered { .. } | ScanEvent::RegionExited { .. } => EventSeverity::Info,
            ScanEvent::PageTextMissing { .. } => EventSeverity::Warning,
            ScanEvent::RowPatternMismatch { .. } => EventSeverity::Debug,
        }
    }
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanEvent::RegionEntered { page } => {
                write!(f, "requirements table found on page {page}")
            }
            ScanEvent::RegionExited { page } => {
                write!(f, "end of requirements table detected on page {page}")
            }
            ScanEvent::PageTextMissing { page } => {
                write!(f, "page {page} is empty or text could not be extracted")
            }
            ScanEvent::RowPatternMismatch { page, line } => {
                write!(f, "line on page {page} did not fully match: {line}")
            }
        }
    }
}
