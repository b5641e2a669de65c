pub mod pdftotext;
pub mod xlsx;

use crate::error::ReqtabError;

/// Text extracted from a single page of a PDF.
///
/// `text` is `None` when the backend could not recover any text from
/// the page; the scanner skips such pages and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: usize,
    pub text: Option<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageText per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, ReqtabError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
