//! PDF text extraction that never fails past its boundary

use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// Outcome of extracting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Document parsed; `text` may still be empty if no page had text
    Extracted {
        text: String,
        pages_total: usize,
        pages_with_text: usize,
    },
    /// Document missing, unreadable or unparsable
    Failed { reason: String },
}

impl Extraction {
    /// Extracted text, empty for failures
    pub fn text(&self) -> &str {
        match self {
            Extraction::Extracted { text, .. } => text,
            Extraction::Failed { .. } => "",
        }
    }

    /// Consume into the extracted text, empty for failures
    pub fn into_text(self) -> String {
        match self {
            Extraction::Extracted { text, .. } => text,
            Extraction::Failed { .. } => String::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Extraction::Failed { .. })
    }
}

/// Page-wise PDF text extractor
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    /// Upper bound on a single pdf-extract run
    timeout: Duration,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the pdf-extract timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extract a document. Failures are logged and returned as [`Extraction::Failed`].
    pub fn extract(&self, path: &Path) -> Extraction {
        match self.try_extract(path) {
            Ok(pages) => {
                let pages_total = pages.len();
                let (text, pages_with_text) = join_pages(&pages);
                tracing::debug!(
                    "Extracted {} of {} pages from {}",
                    pages_with_text,
                    pages_total,
                    path.display()
                );
                Extraction::Extracted {
                    text,
                    pages_total,
                    pages_with_text,
                }
            }
            Err(e) => {
                let reason = match e {
                    Error::DocumentParse { message, .. } => message,
                    other => other.to_string(),
                };
                tracing::error!("PDF processing failed for {}: {}", path.display(), reason);
                Extraction::Failed { reason }
            }
        }
    }

    /// Extract a document and keep only the text
    pub fn extract_text(&self, path: &Path) -> String {
        self.extract(path).into_text()
    }

    /// Read the file and return raw per-page text in page order
    fn try_extract(&self, path: &Path) -> Result<Vec<String>> {
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(Error::document_parse(&path_str, format!("File not found: {}", path_str)));
        }
        if !path.is_file() {
            return Err(Error::document_parse(&path_str, "Not a regular file"));
        }

        let data = std::fs::read(path)
            .map_err(|e| Error::document_parse(&path_str, format!("Failed to read: {}", e)))?;

        self.extract_pages_with_timeout(data.clone())
            .or_else(|e| {
                tracing::warn!("pdf-extract failed for {}: {}, trying fallback", path_str, e);
                extract_pages_fallback(&data)
            })
            .map_err(|e| match e {
                Error::DocumentParse { message, .. } => Error::document_parse(&path_str, message),
                other => other,
            })
    }

    /// Run pdf-extract away from the caller's thread
    fn extract_pages_with_timeout(&self, data: Vec<u8>) -> Result<Vec<String>> {
        run_isolated(self.timeout, move || {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        })?
        .map_err(|e| Error::document_parse("pdf", e.to_string()))
    }
}

/// Run `job` on a helper thread so a panic or hang in a font decoder
/// becomes an error instead of taking the caller down
fn run_isolated<T, F>(timeout: Duration, job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let _ = tx.send(job());
    });

    match rx.recv_timeout(timeout) {
        Ok(value) => {
            let _ = handle.join();
            Ok(value)
        }
        Err(mpsc::RecvTimeoutError::Timeout) => Err(Error::document_parse(
            "pdf",
            format!("extraction timed out after {:?}", timeout),
        )),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            Err(Error::document_parse("pdf", "extraction thread panicked"))
        }
    }
}

/// Per-page extraction with lopdf, used when pdf-extract fails
fn extract_pages_fallback(data: &[u8]) -> Result<Vec<String>> {
    let doc = lopdf::Document::load_mem(data)
        .map_err(|e| Error::document_parse("pdf", format!("Failed to load PDF: {}", e)))?;

    let pages = doc
        .get_pages()
        .into_keys()
        .map(|page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("No text on page {}: {}", page_number, e);
                String::new()
            }
        })
        .collect();

    Ok(pages)
}

/// Join pages that carry text with newlines, in order. Pages that are empty
/// or whitespace only are skipped; kept pages are not altered.
/// Returns the text and the number of pages kept.
pub(crate) fn join_pages(pages: &[String]) -> (String, usize) {
    let kept: Vec<&str> = pages
        .iter()
        .map(String::as_str)
        .filter(|page| !page.trim().is_empty())
        .collect();
    let count = kept.len();
    (kept.join("\n"), count)
}
