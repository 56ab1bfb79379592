use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to count pages: {0}")]
    PageCount(String),
    #[error("failed to extract text from page {page}: {message}")]
    Page { page: usize, message: String },
    #[error("backend panicked: {0}")]
    Panicked(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Build a [`BackendError::Page`] for a 0-based page index.
    ///
    /// The stored page number is 1-based, as users count pages.
    pub fn page(index: usize, message: impl Into<String>) -> Self {
        Self::Page {
            page: index + 1,
            message: message.into(),
        }
    }
}

/// Trait for PDF text extraction backends.
///
/// Implementors open a document and hand back a [`PdfDocument`] handle; the
/// fallback sequencing lives in [`crate::FallbackRunner`].
pub trait PdfBackend: Send + Sync {
    /// Human-readable engine name, used as the prefix of failure diagnostics.
    fn name(&self) -> &'static str;

    /// Open the document at `path`. Every call returns a fresh handle.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An open document belonging to one extraction attempt.
pub trait PdfDocument {
    fn page_count(&self) -> Result<usize, BackendError>;

    /// Extract the text of the page at the 0-based `index`, unmodified.
    fn page_text(&mut self, index: usize) -> Result<String, BackendError>;
}
