use std::path::PathBuf;

use reqtab_core::error::ReqtabError;
use reqtab_core::extraction::pdftotext::PdftotextExtractor;
use reqtab_core::scan::ScanConfig;

pub fn run(input_file: PathBuf) -> Result<(), ReqtabError> {
    let bytes = std::fs::read(&input_file)?;
    let file_name = input_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let extractor = PdftotextExtractor::new();
    let extracted =
        reqtab_core::extract_file(file_name, &bytes, &extractor, &ScanConfig::default())?;
    super::report_warnings(&extracted.events);

    if extracted.requirements.is_empty() {
        eprintln!("No requirements extracted from {}", input_file.display());
    }

    println!("{}", serde_json::to_string_pretty(&extracted.requirements)?);
    Ok(())
}
