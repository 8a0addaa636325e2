//! Diagnostics reported while extracting pages.
//!
//! Extraction never fails; degraded results are reported to an injected
//! [`DiagnosticSink`] instead.

use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

/// A non-fatal problem found in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The page has no `<main>` element, so none of its content was indexed.
    MissingMainContent { url: String },
}

impl Diagnostic {
    /// Route of the page the diagnostic is about.
    pub fn url(&self) -> &str {
        match self {
            Self::MissingMainContent { url } => url,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMainContent { url } => write!(
                f,
                "page has no <main>, therefore no content was indexed for this page: {url}"
            ),
        }
    }
}

/// Receiver for extraction diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that logs every diagnostic as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(url = diagnostic.url(), "{diagnostic}");
    }
}

/// Sink that keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
