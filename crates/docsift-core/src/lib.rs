//! docsift Core Library
//!
//! Core types, plugin options, translations and the build manifest shared by
//! the docsift crates.

pub mod config;
pub mod document;
pub mod error;
pub mod manifest;
pub mod translations;

pub use config::{
    ExternalSearchSource, IgnoreFile, IgnorePattern, OneOrMany, PluginConfig, PluginOptions,
};
pub use document::{DocType, DocumentDescriptor, IndexedDocument, ParsedDocument, Section};
pub use error::{CoreError, Result};
pub use manifest::{BuildManifest, TrailingSlash};
pub use translations::Translations;
