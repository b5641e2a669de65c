use std::path::PathBuf;

use reqtab_core::error::ReqtabError;
use reqtab_core::export;
use reqtab_core::extraction::pdftotext::PdftotextExtractor;
use reqtab_core::extraction::xlsx;
use reqtab_core::scan::ScanConfig;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ReqtabError> {
    let bytes = std::fs::read(&input_file)?;
    let extension = input_file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let extractor = PdftotextExtractor::new();
            let outcome =
                reqtab_core::extract_requirements(&bytes, &extractor, &ScanConfig::default())?;
            super::report_warnings(&outcome.events);

            let Some(table) = outcome.table.as_ref() else {
                eprintln!("No requirements table found in {}", input_file.display());
                return Ok(());
            };

            match output_file {
                Some(path) => {
                    export::save_table_csv(table, &path)?;
                    eprintln!(
                        "Extracted {} row(s), written to {}",
                        table.len(),
                        path.display()
                    );
                }
                None => {
                    let rendered = match output_format {
                        "json" => serde_json::to_string_pretty(&outcome)?,
                        "csv" => export::table_to_csv(table)?,
                        _ => output::table::format_table(table),
                    };
                    println!("{rendered}");
                }
            }
        }
        "xlsx" | "xls" => {
            let sheet = xlsx::clean_workbook(&bytes, None)?;
            if sheet.is_empty() {
                eprintln!("No usable data found in {}", input_file.display());
                return Ok(());
            }

            match output_file {
                Some(path) => {
                    std::fs::write(&path, export::sheet_to_csv(&sheet)?)?;
                    eprintln!(
                        "Extracted {} row(s), written to {}",
                        sheet.rows.len(),
                        path.display()
                    );
                }
                None => {
                    let rendered = match output_format {
                        "json" => serde_json::to_string_pretty(&sheet)?,
                        "csv" => export::sheet_to_csv(&sheet)?,
                        _ => output::table::format_sheet(&sheet),
                    };
                    println!("{rendered}");
                }
            }
        }
        other => return Err(ReqtabError::UnsupportedFileType(other.to_string())),
    }

    Ok(())
}
