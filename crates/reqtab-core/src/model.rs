use serde::{Deserialize, Serialize};

use crate::events::ScanEvent;
use crate::extraction::xlsx::CleanedSheet;

/// One row of the extracted requirements table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Base requirement key plus version tag, e.g. `"REQ-1234 v2"`.
    pub identifier: String,
    /// Title/description text, joined across continuation lines.
    pub name: String,
}

/// The extracted requirements table, rows in first-seen order.
///
/// Repeated identifiers stay separate rows; no deduplication happens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsTable {
    pub rows: Vec<RequirementRecord>,
}

impl RequirementsTable {
    /// Column names, in output order.
    pub const HEADERS: [&'static str; 2] = ["Unique ID", "Name"];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A requirement record as consumed by downstream processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Requirement {
    /// Map an extracted PDF table into requirements.
    pub fn from_table(table: &RequirementsTable) -> Vec<Self> {
        table
            .rows
            .iter()
            .map(|row| Self {
                id: row.identifier.clone(),
                description: row.name.clone(),
                category: Some("Active Requirement".to_string()),
            })
            .collect()
    }

    /// Map a cleaned spreadsheet into requirements.
    ///
    /// Column 0 is the ID, column 1 the description, column 2 the
    /// category. Blank cells fall back to a zero-padded `REQ_` ID,
    /// a placeholder description, or the "General" category.
    pub fn from_sheet(sheet: &CleanedSheet) -> Vec<Self> {
        sheet
            .rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let id = match cells.first().filter(|c| !c.is_empty()) {
                    Some(cell) => cell.clone(),
                    None => format!("REQ_{index:03}"),
                };
                let description = cells
                    .get(1)
                    .filter(|c| !c.is_empty())
                    .cloned()
                    .unwrap_or_else(|| "No description available".to_string());
                let category = cells
                    .get(2)
                    .filter(|c| !c.is_empty())
                    .cloned()
                    .or_else(|| Some("General".to_string()));
                Self {
                    id,
                    description,
                    category,
                }
            })
            .collect()
    }
}

/// Requirements extracted from one uploaded document, with the scan
/// diagnostics recorded along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRequirements {
    pub requirements: Vec<Requirement>,
    pub events: Vec<ScanEvent>,
}
