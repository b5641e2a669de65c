use std::io::Cursor;

use calamine::{Reader, Xlsx};
use serde::{Deserialize, Serialize};

use crate::error::ReqtabError;

/// A spreadsheet reduced to a plain string table.
///
/// Headers come from the first row with surrounding whitespace
/// trimmed; fully empty rows are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CleanedSheet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read an xlsx workbook into a `CleanedSheet`.
///
/// Reads the named sheet, or the first sheet when `sheet_name` is
/// `None`. The first row becomes the headers.
pub fn clean_workbook(bytes: &[u8], sheet_name: Option<&str>) -> Result<CleanedSheet, ReqtabError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| ReqtabError::Workbook(format!("failed to open xlsx: {e}")))?;

    let sheet = match sheet_name {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| ReqtabError::Workbook(format!("sheet '{name}' not found: {e}")))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ReqtabError::Workbook("workbook has no sheets".into()))?
            .map_err(|e| ReqtabError::Workbook(format!("failed to read first sheet: {e}")))?,
    };

    let mut rows_iter = sheet.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row
            .iter()
            .map(|cell| cell_as_string(cell).unwrap_or_default())
            .collect(),
        None => return Ok(CleanedSheet::default()),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell_as_string(cell).unwrap_or_default())
            .collect();
        // Drop fully empty rows
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    Ok(CleanedSheet { headers, rows })
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::DateTime(dt) => Some(dt.to_string()),
        calamine::Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_as_string_trims_text() {
        let cell = calamine::Data::String("  Unique ID  ".into());
        assert_eq!(cell_as_string(&cell).as_deref(), Some("Unique ID"));
    }

    #[test]
    fn cell_as_string_whitespace_only_is_none() {
        let cell = calamine::Data::String("   ".into());
        assert_eq!(cell_as_string(&cell), None);
    }

    #[test]
    fn cell_as_string_numbers() {
        assert_eq!(
            cell_as_string(&calamine::Data::Float(1.5)).as_deref(),
            Some("1.5")
        );
        assert_eq!(
            cell_as_string(&calamine::Data::Int(7)).as_deref(),
            Some("7")
        );
    }

    #[test]
    fn cell_as_string_empty_is_none() {
        assert_eq!(cell_as_string(&calamine::Data::Empty), None);
    }
}
