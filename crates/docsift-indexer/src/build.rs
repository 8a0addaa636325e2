//! Index build orchestration.
//!
//! Resolves the routes of a finished site, reads and parses every surviving
//! page and extracts it, in parallel.

use std::{
    fs,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Instant,
};

use docsift_core::{BuildManifest, DocumentDescriptor, IndexedDocument, PluginConfig};
use docsift_extract::{ContentExtractor, Diagnostic, DiagnosticSink, TracingSink};
use docsift_routes::RouteResolver;
use rayon::prelude::*;
use scraper::Html;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Index build errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Core error.
    #[error(transparent)]
    Core(#[from] docsift_core::CoreError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Index build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of routes in the manifest.
    pub routes: usize,

    /// Number of routes resolved to documents.
    pub resolved: usize,

    /// Number of documents extracted.
    pub extracted: usize,

    /// Number of documents whose file could not be read.
    pub failed: usize,

    /// Number of documents without a main content region.
    pub missing_main: usize,

    /// Number of extracted documents with no text at all.
    pub empty: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Result of an index build.
#[derive(Debug, Clone, Default)]
pub struct IndexOutput {
    /// Extracted documents in manifest order.
    pub documents: Vec<IndexedDocument>,

    /// Build statistics.
    pub stats: IndexStats,
}

/// Counts diagnostics and forwards them to another sink.
struct CountingSink {
    inner: Arc<dyn DiagnosticSink>,
    missing_main: AtomicUsize,
}

impl DiagnosticSink for CountingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::MissingMainContent { .. } => {
                self.missing_main.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.inner.report(diagnostic);
    }
}

/// Orchestrates route resolution and page extraction.
pub struct Indexer {
    config: PluginConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Indexer {
    /// Create a new indexer that logs diagnostics through `tracing`.
    #[must_use]
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Report extraction diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Resolve the manifest without reading any page.
    pub fn resolve(&self, manifest: &BuildManifest) -> Vec<DocumentDescriptor> {
        RouteResolver::new(&self.config).resolve(manifest)
    }

    /// Execute the full index build.
    pub fn run(&self, manifest: &BuildManifest) -> Result<IndexOutput> {
        let start = Instant::now();
        let mut stats = IndexStats {
            routes: manifest.routes.len(),
            ..IndexStats::default()
        };

        info!(
            out_dir = %manifest.out_dir.display(),
            routes = stats.routes,
            "starting index build"
        );

        // 1. Resolve routes
        let descriptors = self.resolve(manifest);
        stats.resolved = descriptors.len();

        // 2. Read, parse and extract pages in parallel
        let counter = Arc::new(CountingSink {
            inner: Arc::clone(&self.sink),
            missing_main: AtomicUsize::new(0),
        });
        let extractor = ContentExtractor::with_sink(counter.clone());

        let results: Vec<_> = descriptors
            .into_par_iter()
            .map(|descriptor| extract_page(&extractor, descriptor))
            .collect();

        // 3. Keep successes, log failures
        let mut documents = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(document) => documents.push(document),
                Err(e) => {
                    warn!(error = %e, "failed to index page");
                    stats.failed += 1;
                }
            }
        }

        stats.extracted = documents.len();
        stats.empty = documents.iter().filter(|d| d.document.is_empty()).count();
        stats.missing_main = counter.missing_main.load(Ordering::Relaxed);
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            resolved = stats.resolved,
            extracted = stats.extracted,
            failed = stats.failed,
            missing_main = stats.missing_main,
            empty = stats.empty,
            duration_ms = stats.duration_ms,
            "index build complete"
        );

        Ok(IndexOutput { documents, stats })
    }
}

impl std::fmt::Debug for Indexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indexer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Read, parse and extract one page.
fn extract_page(
    extractor: &ContentExtractor,
    descriptor: DocumentDescriptor,
) -> Result<IndexedDocument> {
    let markup = fs::read_to_string(&descriptor.file_path).map_err(|source| {
        IndexError::ReadPage {
            path: descriptor.file_path.clone(),
            source,
        }
    })?;

    let html = Html::parse_document(&markup);
    let document = extractor.extract(&html, &descriptor.url);

    debug!(url = %descriptor.url, path = %descriptor.file_path.display(), "extracted page");

    Ok(IndexedDocument {
        descriptor,
        document,
    })
}
