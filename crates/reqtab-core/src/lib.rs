pub mod error;
pub mod events;
pub mod export;
pub mod extraction;
pub mod model;
pub mod scan;

use error::ReqtabError;
use extraction::PdfExtractor;
use model::{ExtractedRequirements, Requirement};
use scan::{ScanConfig, ScanOutcome};

/// Main API entry point: extract the requirements table from a PDF.
///
/// Runs the extraction backend over the document bytes and scans the
/// resulting pages with one state machine. Malformed or table-less
/// input is not an error; the outcome carries `table: None` and any
/// diagnostics recorded along the way. Only the backend itself (or
/// I/O before it) can fail.
pub fn extract_requirements(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ScanConfig,
) -> Result<ScanOutcome, ReqtabError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(scan::scan_pages(&pages, config))
}

/// Extract requirement records from an uploaded document, dispatching
/// on the file extension.
///
/// PDFs go through the table scanner; xlsx/xls workbooks go through
/// the sheet cleaner. Anything else is rejected.
pub fn extract_file(
    file_name: &str,
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ScanConfig,
) -> Result<ExtractedRequirements, ReqtabError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let outcome = extract_requirements(bytes, extractor, config)?;
            let requirements = outcome
                .table
                .as_ref()
                .map(Requirement::from_table)
                .unwrap_or_default();
            Ok(ExtractedRequirements {
                requirements,
                events: outcome.events,
            })
        }
        "xlsx" | "xls" => {
            let sheet = extraction::xlsx::clean_workbook(bytes, None)?;
            Ok(ExtractedRequirements {
                requirements: Requirement::from_sheet(&sheet),
                events: Vec::new(),
            })
        }
        other => Err(ReqtabError::UnsupportedFileType(other.to_string())),
    }
}
