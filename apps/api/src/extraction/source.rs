//! Text source adapter: turns raw document bytes into one lowercase text blob.

use tracing::{debug, warn};

use crate::errors::PipelineError;
use crate::extraction::models::RawDocument;

/// Decodes a PDF byte stream into per-page raw text.
///
/// A page without extractable text is returned as an empty (or whitespace-only) string.
pub trait PdfDecoder: Send + Sync {
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<String>, PipelineError>;
}

/// Default decoder backed by `pdf-extract`.
pub struct PdfExtractDecoder;

impl PdfDecoder for PdfExtractDecoder {
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<String>, PipelineError> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| PipelineError::Decode(format!("invalid PDF byte stream: {e}")))
    }
}

/// Produces the lowercase text of a document.
///
/// PDFs contribute one entry per page that yielded text, joined by a single newline.
/// Anything else is decoded as UTF-8.
pub fn extract_text(doc: &RawDocument, pdf: &dyn PdfDecoder) -> Result<String, PipelineError> {
    if doc.is_pdf() {
        let pages = pdf.decode_pages(&doc.bytes)?;
        let text = join_pages(&pages);
        debug!(
            "Extracted {} bytes of text from {} PDF pages of '{}'",
            text.len(),
            pages.len(),
            doc.filename
        );
        Ok(text)
    } else {
        let text = std::str::from_utf8(&doc.bytes).map_err(|e| {
            PipelineError::Decode(format!("'{}' is not valid UTF-8: {e}", doc.filename))
        })?;
        Ok(text.to_lowercase())
    }
}

fn join_pages(pages: &[String]) -> String {
    let mut kept = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            warn!("PDF page {} has no extractable text; skipping", index + 1);
            continue;
        }
        kept.push(page.as_str());
    }
    kept.join("\n").to_lowercase()
}
