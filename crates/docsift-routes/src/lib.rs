//! docsift Routes Library
//!
//! Turns the flat route list of a finished site build into document
//! descriptors: which routes are content, what kind of content, and which
//! HTML file holds it.
//!
//! # Example
//!
//! ```
//! use docsift_core::{BuildManifest, DocType, PluginConfig};
//! use docsift_routes::RouteResolver;
//!
//! let manifest = BuildManifest::new(
//!     vec!["/".to_string(), "/docs".to_string(), "/docs/intro".to_string()],
//!     "/build",
//! );
//! let descriptors = RouteResolver::new(&PluginConfig::default()).resolve(&manifest);
//!
//! assert_eq!(descriptors.len(), 1);
//! assert_eq!(descriptors[0].doc_type, DocType::Docs);
//! assert_eq!(descriptors[0].url, "/docs/intro");
//! ```

pub mod reserved;
pub mod resolver;

pub use reserved::{RESERVED_ROUTES, RESERVED_SUBROUTES};
pub use resolver::{Classification, DropReason, RouteResolver, output_file, resolve_routes};
