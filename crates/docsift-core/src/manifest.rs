//! Post-build manifest: the routes a site build emitted and where it wrote them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Site-wide rule deciding how routes map to files on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TrailingSlash {
    /// `trailing_slash = true`: every route is written as `<route>/index.html`.
    Directory,
    /// `trailing_slash = false`: routes are written as `<route>.html`.
    Flat,
    /// Not set: the generator writes `<route>/index.html` and serves both forms.
    #[default]
    Unspecified,
}

impl From<Option<bool>> for TrailingSlash {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Directory,
            Some(false) => Self::Flat,
            None => Self::Unspecified,
        }
    }
}

impl From<TrailingSlash> for Option<bool> {
    fn from(policy: TrailingSlash) -> Self {
        match policy {
            TrailingSlash::Directory => Some(true),
            TrailingSlash::Flat => Some(false),
            TrailingSlash::Unspecified => None,
        }
    }
}

/// Routes and output location of a finished site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Absolute route paths in emission order.
    pub routes: Vec<String>,

    /// Build output directory.
    pub out_dir: PathBuf,

    /// Prefix every route starts with.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Trailing-slash policy the site was built with.
    #[serde(default)]
    pub trailing_slash: TrailingSlash,
}

fn default_base_url() -> String {
    "/".to_string()
}

impl BuildManifest {
    /// Create a manifest for routes under the root base URL.
    pub fn new(routes: Vec<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            routes,
            out_dir: out_dir.into(),
            base_url: default_base_url(),
            trailing_slash: TrailingSlash::default(),
        }
    }

    /// Set the site base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the trailing-slash policy.
    #[must_use]
    pub fn with_trailing_slash(mut self, trailing_slash: TrailingSlash) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::manifest(path, "file not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::manifest(path, e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            routes = manifest.routes.len(),
            "loaded build manifest"
        );

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_from_option() {
        assert_eq!(TrailingSlash::from(Some(true)), TrailingSlash::Directory);
        assert_eq!(TrailingSlash::from(Some(false)), TrailingSlash::Flat);
        assert_eq!(TrailingSlash::from(None), TrailingSlash::Unspecified);
    }

    #[test]
    fn test_parse_manifest() {
        let manifest: BuildManifest = serde_json::from_str(
            r#"{
                "routes": ["/base/", "/base/docs/a"],
                "out_dir": "/build",
                "base_url": "/base/",
                "trailing_slash": false
            }"#,
        )
        .expect("parse manifest");

        assert_eq!(manifest.routes, vec!["/base/", "/base/docs/a"]);
        assert_eq!(manifest.out_dir, PathBuf::from("/build"));
        assert_eq!(manifest.base_url, "/base/");
        assert_eq!(manifest.trailing_slash, TrailingSlash::Flat);
    }

    #[test]
    fn test_manifest_defaults() {
        let manifest: BuildManifest =
            serde_json::from_str(r#"{"routes": [], "out_dir": "build"}"#).expect("parse");
        assert_eq!(manifest.base_url, "/");
        assert_eq!(manifest.trailing_slash, TrailingSlash::Unspecified);

        let manifest: BuildManifest = serde_json::from_str(
            r#"{"routes": [], "out_dir": "build", "trailing_slash": null}"#,
        )
        .expect("parse");
        assert_eq!(manifest.trailing_slash, TrailingSlash::Unspecified);
    }

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"routes": ["/docs/a/"], "out_dir": "/build", "trailing_slash": true}"#,
        )
        .expect("write");

        let manifest = BuildManifest::load(&path).expect("load manifest");
        assert_eq!(manifest.routes, vec!["/docs/a/"]);
        assert_eq!(manifest.trailing_slash, TrailingSlash::Directory);
    }

    #[test]
    fn test_load_invalid_manifest() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, r#"{"routes": "oops"}"#).expect("write");

        let err = BuildManifest::load(&path).unwrap_err();
        assert!(err.to_string().contains("Manifest error"));
    }

    #[test]
    fn test_load_missing_manifest() {
        let err = BuildManifest::load(Path::new("/nonexistent/manifest.json")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
