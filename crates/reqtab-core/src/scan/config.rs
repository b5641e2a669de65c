use std::sync::LazyLock;

use regex::Regex;

use crate::error::ReqtabError;

static REGION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bActive\s+Requirements\b").expect("default region marker pattern")
});

static SECTION_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}\.\d+\s+|^[A-Z][a-zA-Z\s]+:").expect("default section boundary pattern")
});

static ROW_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^REQ-[\w-]+\s+v\d+").expect("default row start pattern"));

static ROW_CAPTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(REQ-[\w-]+)\s+v(\d+)\s+(.+?)(?:\s+\(\w+\)\s*\d+)?$")
        .expect("default row capture pattern")
});

/// Patterns driving the table scan.
///
/// Passing different patterns substitutes another table marker or ID
/// format without touching the scan control flow.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Heading that opens the target table region. Searched anywhere
    /// in the line.
    pub region_marker: Regex,
    /// A new, unrelated section heading: a numbered heading or a
    /// capitalized label ending in a colon. Ends capture.
    pub section_boundary: Regex,
    /// Loose test for a line that begins a new row: identifier token
    /// followed by a version token.
    pub row_start: Regex,
    /// Strict row parse with three capture groups (base identifier,
    /// version number, title); an optional trailing `(word) number`
    /// annotation is matched so it drops out of the title.
    pub row_capture: Regex,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            region_marker: REGION_MARKER.clone(),
            section_boundary: SECTION_BOUNDARY.clone(),
            row_start: ROW_START.clone(),
            row_capture: ROW_CAPTURE.clone(),
        }
    }
}

impl ScanConfig {
    /// Build a config from caller-supplied patterns.
    pub fn with_patterns(
        region_marker: &str,
        section_boundary: &str,
        row_start: &str,
        row_capture: &str,
    ) -> Result<Self, ReqtabError> {
        Ok(Self {
            region_marker: Regex::new(region_marker)?,
            section_boundary: Regex::new(section_boundary)?,
            row_start: Regex::new(row_start)?,
            row_capture: Regex::new(row_capture)?,
        })
    }
}
