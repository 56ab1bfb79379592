use std::io::Write;

use owo_colors::OwoColorize;
use pdftext_core::{AttemptFailure, RunEvent};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print one runner event: a page's text, or a failure diagnostic.
pub fn print_event(
    w: &mut dyn Write,
    event: &RunEvent<'_>,
    color: ColorMode,
) -> std::io::Result<()> {
    match event {
        RunEvent::Page {
            backend,
            index,
            text,
        } => {
            tracing::trace!(backend, page = index + 1, bytes = text.len(), "page written");
            writeln!(w, "{}", text)
        }
        RunEvent::Failed(failure) => print_failure(w, failure, color),
    }
}

/// Print `"<backend> failed: <error>"`, in red when color is enabled.
pub fn print_failure(
    w: &mut dyn Write,
    failure: &AttemptFailure,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", failure.to_string().red())
    } else {
        writeln!(w, "{}", failure)
    }
}
