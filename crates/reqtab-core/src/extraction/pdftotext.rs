use std::io::Write;
use std::process::Command;

use crate::error::ReqtabError;
use crate::extraction::{PageText, PdfExtractor};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, ReqtabError> {
        // Write PDF bytes to a temp file; the handle is dropped (and the
        // file removed) on every exit path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ReqtabError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| ReqtabError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ReqtabError::PdftotextNotFound
                } else {
                    ReqtabError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ReqtabError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed \x0c separates pages).
///
/// A page with no text at all maps to `text: None` so the scanner can
/// report it and move on. pdftotext terminates every page with a form
/// feed, so the final split element is an empty artifact and dropped.
fn split_pages(text: &str) -> Vec<PageText> {
    let mut pages: Vec<PageText> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageText {
            page_number: i + 1,
            text: if page_text.is_empty() {
                None
            } else {
                Some(page_text.to_string())
            },
        })
        .collect();

    if pages.len() > 1 && pages.last().is_some_and(|p| p.text.is_none()) {
        pages.pop();
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pages_drops_trailing_form_feed_artifact() {
        let pages = split_pages("page one\nline two\n\x0cpage two\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text.as_deref(), Some("page one\nline two\n"));
        assert_eq!(pages[1].text.as_deref(), Some("page two\n"));
    }

    #[test]
    fn split_pages_marks_empty_interior_page_as_missing() {
        let pages = split_pages("first\n\x0c\x0cthird\n\x0c");
        assert_eq!(pages.len(), 3);
        assert!(pages[1].text.is_none());
        assert_eq!(pages[2].page_number, 3);
    }

    #[test]
    fn split_pages_single_page_without_form_feed() {
        let pages = split_pages("only page\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text.as_deref(), Some("only page\n"));
    }
}
