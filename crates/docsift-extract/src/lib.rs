//! docsift Extract Library
//!
//! Pulls a title and search-ready text out of rendered HTML pages.
//!
//! # Example
//!
//! ```
//! use docsift_extract::ContentExtractor;
//!
//! let doc = ContentExtractor::new().extract_str(
//!     "<html><body><main><h1>Intro</h1><p>Hello <b>world</b>.</p></main></body></html>",
//!     "/docs/intro",
//! );
//!
//! assert_eq!(doc.page_title, "Intro");
//! assert_eq!(doc.sections[0].content, "Intro Hello world.");
//! ```

pub mod condense;
pub mod diagnostics;
pub mod extractor;

pub use condense::{collapse_whitespace, condensed_text};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use extractor::{ContentExtractor, extract_document, main_content, page_title};
