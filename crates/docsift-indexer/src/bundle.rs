//! JSON hand-off of extracted documents.
//!
//! The bundle is consumed by whatever builds the actual search index; it is
//! not an index itself.

use std::{fs, path::Path};

use docsift_core::IndexedDocument;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::build::Result;

/// Size above which a bundle is considered too large to ship to a browser.
pub const MAX_BUNDLE_SIZE: usize = 5 * 1024 * 1024;

/// Current bundle format version.
pub const BUNDLE_VERSION: u32 = 1;

/// Serializable list of extracted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentBundle {
    /// Format version.
    pub version: u32,

    /// Documents in manifest order.
    pub documents: Vec<IndexedDocument>,
}

impl DocumentBundle {
    /// Wrap extracted documents.
    #[must_use]
    pub fn new(documents: Vec<IndexedDocument>) -> Self {
        Self {
            version: BUNDLE_VERSION,
            documents,
        }
    }

    /// Number of documents in the bundle.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the bundle holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Serialize the bundle to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the bundle to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a bundle from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the bundle to a file, creating parent directories.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if json.len() > MAX_BUNDLE_SIZE {
            warn!(
                size = json.len(),
                max = MAX_BUNDLE_SIZE,
                "document bundle exceeds recommended size"
            );
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &json)?;

        info!(
            path = %path.display(),
            documents = self.documents.len(),
            bytes = json.len(),
            "wrote document bundle"
        );
        Ok(())
    }
}

impl From<Vec<IndexedDocument>> for DocumentBundle {
    fn from(documents: Vec<IndexedDocument>) -> Self {
        Self::new(documents)
    }
}
