use std::any::Any;
use std::fmt;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::backend::{BackendError, PdfBackend, PdfDocument};

/// Something the runner wants the caller to emit, in the order it happens.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Text of one page, exactly as the backend returned it.
    Page {
        backend: &'static str,
        /// 0-based page index.
        index: usize,
        text: &'a str,
    },
    /// An attempt was abandoned.
    Failed(&'a AttemptFailure),
}

/// One failed extraction attempt.
#[derive(Debug)]
pub struct AttemptFailure {
    pub backend: &'static str,
    pub error: BackendError,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.backend, self.error)
    }
}

/// Summary of a single [`FallbackRunner::run`].
#[derive(Debug, Default)]
pub struct RunReport {
    /// Name of the backend that extracted the whole document, if any did.
    pub succeeded_with: Option<&'static str>,
    /// Pages emitted across all attempts, including those from an attempt
    /// that later failed.
    pub pages_written: usize,
    pub failures: Vec<AttemptFailure>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.succeeded_with.is_some()
    }
}

/// Why an attempt stopped early.
enum AttemptError {
    Backend(BackendError),
    /// The caller's sink failed; this ends the whole run.
    Sink(io::Error),
}

/// Tries a primary backend and, only if it fails, a secondary one.
///
/// There is exactly one fallback and no retry. Every backend error, panics
/// included, is caught at the attempt boundary and reported through a
/// [`RunEvent::Failed`] event; only errors returned by the sink itself
/// escape [`run`](Self::run).
pub struct FallbackRunner {
    primary: Box<dyn PdfBackend>,
    secondary: Box<dyn PdfBackend>,
}

impl FallbackRunner {
    pub fn new(primary: Box<dyn PdfBackend>, secondary: Box<dyn PdfBackend>) -> Self {
        Self { primary, secondary }
    }

    /// Extract `path`, handing every page and every failure to `sink` as it
    /// happens.
    pub fn run<F>(&self, path: &Path, mut sink: F) -> io::Result<RunReport>
    where
        F: FnMut(RunEvent<'_>) -> io::Result<()>,
    {
        let mut report = RunReport::default();

        for backend in [self.primary.as_ref(), self.secondary.as_ref()] {
            let name = backend.name();
            tracing::debug!(backend = name, path = %path.display(), "extraction attempt started");

            match attempt(backend, path, &mut sink, &mut report.pages_written) {
                Ok(pages) => {
                    tracing::debug!(backend = name, pages, "extraction attempt completed");
                    report.succeeded_with = Some(name);
                    return Ok(report);
                }
                Err(AttemptError::Sink(e)) => return Err(e),
                Err(AttemptError::Backend(error)) => {
                    tracing::warn!(backend = name, error = %error, "extraction attempt failed");
                    let failure = AttemptFailure {
                        backend: name,
                        error,
                    };
                    sink(RunEvent::Failed(&failure))?;
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }
}

/// Run one backend over the whole document, returning its page count.
fn attempt<F>(
    backend: &dyn PdfBackend,
    path: &Path,
    sink: &mut F,
    pages_written: &mut usize,
) -> Result<usize, AttemptError>
where
    F: FnMut(RunEvent<'_>) -> io::Result<()>,
{
    let name = backend.name();
    let mut document: Box<dyn PdfDocument> =
        guarded(|| backend.open(path)).map_err(AttemptError::Backend)?;
    let count = guarded(|| document.page_count()).map_err(AttemptError::Backend)?;

    for index in 0..count {
        let text = guarded(|| document.page_text(index)).map_err(AttemptError::Backend)?;
        sink(RunEvent::Page {
            backend: name,
            index,
            text: &text,
        })
        .map_err(AttemptError::Sink)?;
        *pages_written += 1;
    }

    Ok(count)
}

/// Call into a backend, turning a panic into [`BackendError::Panicked`].
fn guarded<T>(f: impl FnOnce() -> Result<T, BackendError>) -> Result<T, BackendError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(BackendError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
