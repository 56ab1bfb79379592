//! Pure-Rust [`PdfBackend`] built on `lopdf`.
//!
//! Used as the fallback engine: it shares no native code with MuPDF, so
//! documents that trip one engine are often still readable by the other.

use std::path::Path;

use lopdf::{Document, Object};

use pdftext_core::{BackendError, PdfBackend, PdfDocument};

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub const NAME: &'static str = "lopdf";

    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        let mut document = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;

        // Owner-password-only documents open with the empty user password.
        if document.is_encrypted() {
            document
                .decrypt("")
                .map_err(|e| BackendError::Open(format!("document is encrypted: {e}")))?;
        }

        // get_pages() yields nothing for an unreachable page tree, so resolve
        // the tree first.
        let declared_pages = declared_page_count(&document)?;

        // Page numbers in page-tree order; lopdf numbers pages from 1.
        let page_numbers = document.get_pages().into_keys().collect();

        Ok(Box::new(LopdfDocument {
            document,
            page_numbers,
            declared_pages,
        }))
    }
}

/// Follow trailer `/Root` to the catalog's `/Pages` and read its `/Count`.
fn declared_page_count(document: &Document) -> Result<usize, BackendError> {
    let broken = |e: lopdf::Error| BackendError::Open(format!("unreadable page tree: {e}"));

    let root_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(broken)?;
    let catalog = document.get_dictionary(root_id).map_err(broken)?;
    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(broken)?;
    let count = document
        .get_dictionary(pages_id)
        .and_then(|pages| pages.get(b"Count"))
        .and_then(Object::as_i64)
        .map_err(broken)?;

    usize::try_from(count)
        .map_err(|_| BackendError::Open(format!("unreadable page tree: /Count is {count}")))
}

struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
    /// `/Count` of the root page tree node.
    declared_pages: usize,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> Result<usize, BackendError> {
        let found = self.page_numbers.len();
        if found != self.declared_pages {
            return Err(BackendError::PageCount(format!(
                "page tree declares {} pages but {} are reachable",
                self.declared_pages, found
            )));
        }
        Ok(found)
    }

    fn page_text(&mut self, index: usize) -> Result<String, BackendError> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| BackendError::page(index, "page out of range"))?;

        self.document
            .extract_text(&[page_number])
            .map_err(|e| BackendError::page(index, e.to_string()))
    }
}
