//! Routes the site generator reserves for itself.

use docsift_core::DocType;

/// The homepage, relative to the base URL.
pub const HOMEPAGE_ROUTE: &str = "";

/// The generated "not found" page.
pub const ERROR_PAGE_ROUTE: &str = "404.html";

/// The route serving the search UI itself.
pub const SEARCH_PAGE_ROUTE: &str = "search";

/// Relative routes that are never content.
pub const RESERVED_ROUTES: &[&str] = &[HOMEPAGE_ROUTE, ERROR_PAGE_ROUTE, SEARCH_PAGE_ROUTE];

/// Auto-generated sub-routes directly below a category base path.
///
/// A route whose first segment below the base path is listed for its
/// category is excluded along with everything beneath it.
pub const RESERVED_SUBROUTES: &[(DocType, &str)] = &[(DocType::Blog, "tags")];

/// Whether a relative route (trailing `/` trimmed) is reserved.
pub fn is_reserved_route(path: &str) -> bool {
    RESERVED_ROUTES.contains(&path)
}

/// Whether `below_base`, the part of a route under a category base path, is
/// reserved for that category.
pub fn is_reserved_subroute(doc_type: DocType, below_base: &str) -> bool {
    let first_segment = below_base.split('/').next().unwrap_or_default();
    RESERVED_SUBROUTES
        .iter()
        .any(|&(category, segment)| category == doc_type && segment == first_segment)
}
