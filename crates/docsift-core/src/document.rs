//! Document types shared by route resolution, extraction and indexing.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Content category of an indexable route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Documentation page mounted under a docs base path.
    Docs,
    /// Blog post mounted under a blog base path.
    Blog,
    /// Any other standalone page.
    Page,
}

impl DocType {
    /// Get the lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Blog => "blog",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved route ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    /// Absolute path of the rendered HTML file in the build output.
    pub file_path: PathBuf,

    /// Content category.
    #[serde(rename = "type")]
    pub doc_type: DocType,

    /// Route exactly as emitted by the build.
    pub url: String,
}

/// A titled block of searchable text within a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title.
    pub title: String,

    /// Anchor within the page, empty for the whole-page section.
    pub hash: String,

    /// Condensed text content.
    pub content: String,
}

/// Extracted content of one rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Page title.
    pub page_title: String,

    /// Sections in document order.
    pub sections: Vec<Section>,

    /// Navigation trail leading to the page.
    pub breadcrumb: Vec<String>,
}

impl ParsedDocument {
    /// Build a document with a single whole-page section.
    pub fn single_section(page_title: impl Into<String>, content: impl Into<String>) -> Self {
        let page_title = page_title.into();
        Self {
            sections: vec![Section {
                title: page_title.clone(),
                hash: String::new(),
                content: content.into(),
            }],
            page_title,
            breadcrumb: Vec::new(),
        }
    }

    /// Whether no section carries any text.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.content.is_empty())
    }
}

/// Descriptor metadata merged with the extracted document, as handed to the
/// index builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Where the document came from.
    #[serde(flatten)]
    pub descriptor: DocumentDescriptor,

    /// What was extracted from it.
    #[serde(flatten)]
    pub document: ParsedDocument,
}
