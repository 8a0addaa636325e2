//! Page extraction: rendered HTML to a [`ParsedDocument`].

use std::{fmt, sync::Arc};

use docsift_core::ParsedDocument;
use scraper::{ElementRef, Html};

use crate::{
    condense::condensed_text,
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
};

/// Extracts the title and searchable text of rendered pages.
///
/// Extraction does not modify the parsed tree, so the same tree always
/// yields the same document.
#[derive(Clone)]
pub struct ContentExtractor {
    sink: Arc<dyn DiagnosticSink>,
}

impl ContentExtractor {
    /// Create an extractor that logs diagnostics through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Create an extractor reporting diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Extract a parsed page. `url` is only used in diagnostics.
    pub fn extract(&self, html: &Html, url: &str) -> ParsedDocument {
        extract_document(html, url, self.sink.as_ref())
    }

    /// Parse and extract a page.
    pub fn extract_str(&self, markup: &str, url: &str) -> ParsedDocument {
        self.extract(&Html::parse_document(markup), url)
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContentExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentExtractor").finish_non_exhaustive()
    }
}

/// Extract a parsed page, reporting problems to `sink`.
pub fn extract_document(html: &Html, url: &str, sink: &dyn DiagnosticSink) -> ParsedDocument {
    let title = page_title(html);

    let content = match main_content(html) {
        Some(main) => condensed_text(main),
        None => {
            sink.report(Diagnostic::MissingMainContent {
                url: url.to_string(),
            });
            String::new()
        }
    };

    ParsedDocument::single_section(title, content)
}

/// Text of the first `<h1>`, falling back to `<title>`.
pub fn page_title(html: &Html) -> String {
    first_element(html, "h1")
        .or_else(|| first_element(html, "title"))
        .map(condensed_text)
        .unwrap_or_default()
}

/// The main content landmark of the page.
pub fn main_content(html: &Html) -> Option<ElementRef<'_>> {
    first_element(html, "main")
}

/// First element with the given local name, in document order.
fn first_element<'a>(html: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    html.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == name)
}
