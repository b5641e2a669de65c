use std::path::Path;

use crate::error::ReqtabError;
use crate::extraction::xlsx::CleanedSheet;
use crate::model::RequirementsTable;

/// Serialize an extracted table to CSV, header row first.
pub fn table_to_csv(table: &RequirementsTable) -> Result<String, ReqtabError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(RequirementsTable::HEADERS)
        .map_err(csv_err)?;
    for row in &table.rows {
        writer
            .write_record([row.identifier.as_str(), row.name.as_str()])
            .map_err(csv_err)?;
    }
    finish(writer)
}

/// Serialize a cleaned sheet to CSV, header row first.
pub fn sheet_to_csv(sheet: &CleanedSheet) -> Result<String, ReqtabError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&sheet.headers).map_err(csv_err)?;
    for row in &sheet.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    finish(writer)
}

/// Write an extracted table to a CSV file.
pub fn save_table_csv(table: &RequirementsTable, path: &Path) -> Result<(), ReqtabError> {
    let csv = table_to_csv(table)?;
    std::fs::write(path, csv)?;
    Ok(())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ReqtabError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReqtabError::Csv(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(csv_err)
}

fn csv_err(e: impl std::fmt::Display) -> ReqtabError {
    ReqtabError::Csv(e.to_string())
}
