//! Backend-agnostic PDF text extraction with a single fallback.
//!
//! A [`FallbackRunner`] owns two [`PdfBackend`]s. It streams the primary's
//! pages to the caller and, only if that attempt fails, starts over with the
//! secondary. Engine adapters live in their own crates.

pub mod backend;
pub mod runner;

pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use runner::{AttemptFailure, FallbackRunner, RunEvent, RunReport};
