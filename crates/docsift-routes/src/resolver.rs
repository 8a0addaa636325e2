//! Route resolution.
//!
//! Filters the routes of a finished build down to indexable content,
//! classifies each survivor and maps it to the HTML file it was written to.

use std::path::{Path, PathBuf};

use docsift_core::{
    BuildManifest, DocType, DocumentDescriptor, IgnoreFile, PluginConfig, TrailingSlash,
};
use tracing::debug;

use crate::reserved::{is_reserved_route, is_reserved_subroute};

/// Why a route was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The route does not start with the site base URL.
    OutsideBaseUrl,
    /// Homepage, error page or search page.
    Reserved,
    /// Matched an `ignore_files` entry.
    Ignored,
    /// The index route of a category.
    Listing,
    /// A generated sub-route such as the blog tag index.
    ReservedSubroute,
    /// The matching category is not indexed.
    CategoryDisabled,
    /// Matched no category and pages are not indexed.
    PagesDisabled,
}

/// Outcome of classifying one relative route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Index the route as this category.
    Keep(DocType),
    /// Leave the route out.
    Drop(DropReason),
}

/// One entry of the ordered category table.
#[derive(Debug, Clone)]
struct CategoryRule {
    doc_type: DocType,
    base_paths: Vec<String>,
    enabled: bool,
}

impl CategoryRule {
    fn new<'a>(
        doc_type: DocType,
        base_paths: impl IntoIterator<Item = &'a String>,
        enabled: bool,
    ) -> Self {
        Self {
            doc_type,
            base_paths: base_paths
                .into_iter()
                .map(|p| p.trim_matches('/').to_string())
                .collect(),
            enabled,
        }
    }

    /// Part of `path` below the first matching base path: `""` for the base
    /// path itself.
    fn match_below<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.base_paths
            .iter()
            .find_map(|base| below_base_path(path, base))
    }
}

/// Resolves build routes into document descriptors.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    /// Tried top to bottom, first match wins.
    categories: Vec<CategoryRule>,
    index_pages: bool,
    ignore_files: Vec<IgnoreFile>,
}

impl RouteResolver {
    /// Create a resolver from normalized plugin options.
    #[must_use]
    pub fn new(config: &PluginConfig) -> Self {
        Self {
            categories: vec![
                CategoryRule::new(
                    DocType::Docs,
                    &config.docs_route_base_path,
                    config.index_docs,
                ),
                CategoryRule::new(
                    DocType::Blog,
                    &config.blog_route_base_path,
                    config.index_blog,
                ),
            ],
            index_pages: config.index_pages,
            ignore_files: config.ignore_files.as_slice().to_vec(),
        }
    }

    /// Resolve every route of the manifest, keeping manifest order.
    pub fn resolve(&self, manifest: &BuildManifest) -> Vec<DocumentDescriptor> {
        let base_url = format!("{}/", manifest.base_url.trim_end_matches('/'));

        let descriptors: Vec<_> = manifest
            .routes
            .iter()
            .filter_map(|route| self.resolve_route(route, &base_url, manifest))
            .collect();

        debug!(
            routes = manifest.routes.len(),
            resolved = descriptors.len(),
            "resolved build routes"
        );

        descriptors
    }

    fn resolve_route(
        &self,
        route: &str,
        base_url: &str,
        manifest: &BuildManifest,
    ) -> Option<DocumentDescriptor> {
        let Some(relative) = relative_path(route, base_url) else {
            debug!(route, reason = ?DropReason::OutsideBaseUrl, "skipping route");
            return None;
        };

        match self.classify(relative) {
            Classification::Keep(doc_type) => {
                Some(DocumentDescriptor {
                    file_path: output_file(&manifest.out_dir, relative, manifest.trailing_slash),
                    doc_type,
                    url: route.to_string(),
                })
            }
            Classification::Drop(reason) => {
                debug!(route, ?reason, "skipping route");
                None
            }
        }
    }

    /// Classify a route path relative to the site base URL.
    pub fn classify(&self, relative: &str) -> Classification {
        let path = relative.trim_end_matches('/');

        if is_reserved_route(path) {
            return Classification::Drop(DropReason::Reserved);
        }

        if self.ignore_files.iter().any(|entry| entry.matches(relative)) {
            return Classification::Drop(DropReason::Ignored);
        }

        for category in &self.categories {
            let Some(below) = category.match_below(path) else {
                continue;
            };

            if below.is_empty() {
                return Classification::Drop(DropReason::Listing);
            }
            if is_reserved_subroute(category.doc_type, below) {
                return Classification::Drop(DropReason::ReservedSubroute);
            }
            if !category.enabled {
                return Classification::Drop(DropReason::CategoryDisabled);
            }
            return Classification::Keep(category.doc_type);
        }

        if self.index_pages {
            Classification::Keep(DocType::Page)
        } else {
            Classification::Drop(DropReason::PagesDisabled)
        }
    }
}

/// Resolve a manifest with the given options.
pub fn resolve_routes(manifest: &BuildManifest, config: &PluginConfig) -> Vec<DocumentDescriptor> {
    RouteResolver::new(config).resolve(manifest)
}

/// Strip the base URL (which must end in `/`) from a route.
///
/// The base URL without its trailing slash is the homepage.
fn relative_path<'r>(route: &'r str, base_url: &str) -> Option<&'r str> {
    if let Some(relative) = route.strip_prefix(base_url) {
        return Some(relative);
    }
    (route == base_url.trim_end_matches('/')).then_some("")
}

/// Part of `path` below `base`, or `None` if `path` is not under `base`.
///
/// An empty `base` is the site root and contains every path.
fn below_base_path<'p>(path: &'p str, base: &str) -> Option<&'p str> {
    if base.is_empty() {
        return Some(path);
    }
    if path == base {
        return Some("");
    }
    path.strip_prefix(base)?.strip_prefix('/')
}

/// Map a relative route to the HTML file the site generator wrote for it.
pub fn output_file(out_dir: &Path, relative: &str, trailing_slash: TrailingSlash) -> PathBuf {
    let relative = relative.trim_end_matches('/');

    if relative.is_empty() {
        return out_dir.join("index.html");
    }

    match trailing_slash {
        TrailingSlash::Flat => out_dir.join(format!("{relative}.html")),
        TrailingSlash::Directory | TrailingSlash::Unspecified => {
            out_dir.join(relative).join("index.html")
        }
    }
}
