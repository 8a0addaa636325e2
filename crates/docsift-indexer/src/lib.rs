//! docsift Indexer Library
//!
//! Runs the post-build pipeline: resolve the routes of a finished site,
//! extract every kept page and hand the documents off as a JSON bundle.

pub mod build;
pub mod bundle;

pub use build::{IndexError, IndexOutput, IndexStats, Indexer, Result};
pub use bundle::{BUNDLE_VERSION, DocumentBundle, MAX_BUNDLE_SIZE};
