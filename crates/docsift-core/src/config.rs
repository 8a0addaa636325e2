//! Plugin option loading and normalization.
//!
//! [`PluginOptions`] is what the user writes: every field is optional.
//! [`PluginOptions::normalize`] fills in defaults and validates, producing the
//! [`PluginConfig`] consumed by route resolution and the search UI.

use std::{fmt, path::Path, slice};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    translations::Translations,
};

/// A single value or a sequence of values.
///
/// Explicit scalars are kept as [`OneOrMany::One`]; consumers iterate both
/// forms the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An ordered sequence of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the values as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A compiled regular expression used to ignore routes.
///
/// Written as `{ pattern = "^__meta__" }` in option files.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPattern", into = "RawPattern")]
pub struct IgnorePattern(Regex);

#[derive(Serialize, Deserialize)]
struct RawPattern {
    pattern: String,
}

impl IgnorePattern {
    /// Compile a new pattern.
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Test the pattern against a relative route path.
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<RawPattern> for IgnorePattern {
    type Error = regex::Error;

    fn try_from(raw: RawPattern) -> std::result::Result<Self, Self::Error> {
        Self::new(&raw.pattern)
    }
}

impl From<IgnorePattern> for RawPattern {
    fn from(pattern: IgnorePattern) -> Self {
        Self {
            pattern: pattern.as_str().to_string(),
        }
    }
}

impl PartialEq for IgnorePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for IgnorePattern {}

impl fmt::Debug for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

/// An entry of `ignore_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnoreFile {
    /// Matches a relative path exactly.
    Exact(String),
    /// Matches when the pattern matches the relative path.
    Pattern(IgnorePattern),
}

impl IgnoreFile {
    /// Whether this entry excludes the given relative path.
    pub fn matches(&self, relative_path: &str) -> bool {
        match self {
            Self::Exact(path) => path == relative_path,
            Self::Pattern(pattern) => pattern.is_match(relative_path),
        }
    }
}

impl From<&str> for IgnoreFile {
    fn from(path: &str) -> Self {
        Self::Exact(path.to_string())
    }
}

impl From<IgnorePattern> for IgnoreFile {
    fn from(pattern: IgnorePattern) -> Self {
        Self::Pattern(pattern)
    }
}

/// Another site whose search index is offered alongside this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSearchSource {
    /// Heading shown above results from this source.
    pub heading: String,

    /// Location of the source's search index.
    pub uri: String,
}

/// Plugin options as written by the user. Missing fields take defaults in
/// [`PluginOptions::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub docs_route_base_path: Option<OneOrMany<String>>,
    #[serde(default)]
    pub blog_route_base_path: Option<OneOrMany<String>>,
    #[serde(default)]
    pub docs_dir: Option<OneOrMany<String>>,
    #[serde(default)]
    pub blog_dir: Option<OneOrMany<String>>,
    #[serde(default)]
    pub index_docs: Option<bool>,
    #[serde(default)]
    pub index_blog: Option<bool>,
    #[serde(default)]
    pub index_pages: Option<bool>,
    #[serde(default)]
    pub ignore_files: Option<OneOrMany<IgnoreFile>>,
    #[serde(default)]
    pub remove_default_stop_word_filter: Option<bool>,
    #[serde(default)]
    pub highlight_search_terms_on_target_page: Option<bool>,
    #[serde(default)]
    pub search_result_limits: Option<usize>,
    #[serde(default)]
    pub search_result_context_max_length: Option<usize>,
    #[serde(default)]
    pub external_search_sources: Option<Vec<ExternalSearchSource>>,
    #[serde(default)]
    pub translations: Option<Translations>,
}

/// Fully defaulted plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Route prefixes the docs plugin is mounted at.
    pub docs_route_base_path: OneOrMany<String>,

    /// Route prefixes the blog plugin is mounted at.
    pub blog_route_base_path: OneOrMany<String>,

    /// Source directories of docs content.
    pub docs_dir: OneOrMany<String>,

    /// Source directories of blog content.
    pub blog_dir: OneOrMany<String>,

    /// Whether to index documentation routes.
    pub index_docs: bool,

    /// Whether to index blog routes.
    pub index_blog: bool,

    /// Whether to index routes outside docs and blog.
    pub index_pages: bool,

    /// Relative paths or patterns excluded from indexing.
    pub ignore_files: OneOrMany<IgnoreFile>,

    pub remove_default_stop_word_filter: bool,
    pub highlight_search_terms_on_target_page: bool,

    /// Maximum number of results shown in the search dropdown.
    pub search_result_limits: usize,

    /// Maximum characters of context around each match.
    pub search_result_context_max_length: usize,

    pub external_search_sources: Vec<ExternalSearchSource>,

    /// UI strings.
    pub translations: Translations,
}

// Default value functions
fn default_docs_path() -> OneOrMany<String> {
    OneOrMany::Many(vec!["docs".to_string()])
}

fn default_blog_path() -> OneOrMany<String> {
    OneOrMany::Many(vec!["blog".to_string()])
}

fn default_search_result_limits() -> usize {
    5
}

fn default_search_result_context_max_length() -> usize {
    50
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            docs_route_base_path: default_docs_path(),
            blog_route_base_path: default_blog_path(),
            docs_dir: default_docs_path(),
            blog_dir: default_blog_path(),
            index_docs: true,
            index_blog: true,
            index_pages: false,
            ignore_files: OneOrMany::default(),
            remove_default_stop_word_filter: false,
            highlight_search_terms_on_target_page: false,
            search_result_limits: default_search_result_limits(),
            search_result_context_max_length: default_search_result_context_max_length(),
            external_search_sources: Vec::new(),
            translations: Translations::default(),
        }
    }
}

impl PluginOptions {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Options file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse options file: {}", path.display()),
                e,
            )
        })
    }

    /// Load options using the config crate, with `DOCSIFT__*` environment
    /// overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("DOCSIFT").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Fill in defaults for every missing field and validate the result.
    pub fn normalize(self) -> Result<PluginConfig> {
        let defaults = PluginConfig::default();

        let config = PluginConfig {
            docs_route_base_path: self
                .docs_route_base_path
                .unwrap_or(defaults.docs_route_base_path),
            blog_route_base_path: self
                .blog_route_base_path
                .unwrap_or(defaults.blog_route_base_path),
            docs_dir: self.docs_dir.unwrap_or(defaults.docs_dir),
            blog_dir: self.blog_dir.unwrap_or(defaults.blog_dir),
            index_docs: self.index_docs.unwrap_or(defaults.index_docs),
            index_blog: self.index_blog.unwrap_or(defaults.index_blog),
            index_pages: self.index_pages.unwrap_or(defaults.index_pages),
            ignore_files: self.ignore_files.unwrap_or(defaults.ignore_files),
            remove_default_stop_word_filter: self
                .remove_default_stop_word_filter
                .unwrap_or(defaults.remove_default_stop_word_filter),
            highlight_search_terms_on_target_page: self
                .highlight_search_terms_on_target_page
                .unwrap_or(defaults.highlight_search_terms_on_target_page),
            search_result_limits: self
                .search_result_limits
                .unwrap_or(defaults.search_result_limits),
            search_result_context_max_length: self
                .search_result_context_max_length
                .unwrap_or(defaults.search_result_context_max_length),
            external_search_sources: self
                .external_search_sources
                .unwrap_or(defaults.external_search_sources),
            translations: self.translations.unwrap_or(defaults.translations),
        };

        config.validate()?;
        Ok(config)
    }
}

impl PluginConfig {
    /// Load and normalize options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        PluginOptions::load(path)?.normalize()
    }

    /// Whether any content category is enabled.
    pub fn indexes_anything(&self) -> bool {
        self.index_docs || self.index_blog || self.index_pages
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.search_result_limits == 0 {
            return Err(CoreError::config("search_result_limits must be positive"));
        }

        if self.search_result_context_max_length == 0 {
            return Err(CoreError::config(
                "search_result_context_max_length must be positive",
            ));
        }

        for (field, paths) in [
            ("docs_route_base_path", &self.docs_route_base_path),
            ("blog_route_base_path", &self.blog_route_base_path),
        ] {
            for path in paths {
                if path.contains("//") || path.contains('?') || path.contains('#') {
                    return Err(CoreError::config(format!(
                        "{field} contains an invalid route prefix: {path:?}"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(toml_src: &str) -> PluginConfig {
        toml::from_str::<PluginOptions>(toml_src)
            .expect("parse options")
            .normalize()
            .expect("normalize options")
    }

    #[test]
    fn test_defaults() {
        let config = parse("");

        assert_eq!(config.docs_route_base_path.as_slice(), ["docs"]);
        assert_eq!(config.blog_route_base_path.as_slice(), ["blog"]);
        assert_eq!(config.docs_dir.as_slice(), ["docs"]);
        assert_eq!(config.blog_dir.as_slice(), ["blog"]);
        assert!(config.index_docs);
        assert!(config.index_blog);
        assert!(!config.index_pages);
        assert!(config.ignore_files.is_empty());
        assert!(!config.remove_default_stop_word_filter);
        assert!(!config.highlight_search_terms_on_target_page);
        assert_eq!(config.search_result_limits, 5);
        assert_eq!(config.search_result_context_max_length, 50);
        assert!(config.external_search_sources.is_empty());
        assert_eq!(config.translations, Translations::default());
        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_scalar_ignore_file_is_not_wrapped() {
        let config = parse(r#"ignore_files = "file1""#);
        assert_eq!(
            config.ignore_files,
            OneOrMany::One(IgnoreFile::Exact("file1".to_string()))
        );
        assert_eq!(config.ignore_files.len(), 1);
    }

    #[test]
    fn test_mixed_ignore_files() {
        let config = parse(r#"ignore_files = [{ pattern = "__meta__$" }, "file1"]"#);
        let entries = config.ignore_files.as_slice();

        assert_eq!(entries.len(), 2);
        assert!(matches!(&entries[0], IgnoreFile::Pattern(p) if p.as_str() == "__meta__$"));
        assert_eq!(entries[1], IgnoreFile::Exact("file1".to_string()));
    }

    #[test]
    fn test_invalid_ignore_pattern_is_rejected() {
        let result = toml::from_str::<PluginOptions>(r#"ignore_files = [{ pattern = "(" }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_base_paths_pass_through() {
        let config = parse(
            r#"
docs_route_base_path = "/dev/docs"
blog_route_base_path = "/dev/blog"
"#,
        );
        assert_eq!(
            config.docs_route_base_path,
            OneOrMany::One("/dev/docs".to_string())
        );
        assert_eq!(
            config.blog_route_base_path,
            OneOrMany::One("/dev/blog".to_string())
        );
    }

    #[test]
    fn test_sequence_base_paths_pass_through() {
        let config = parse(
            r#"
docs_route_base_path = ["/dev/docs"]
blog_route_base_path = ["/dev/blog"]
"#,
        );
        assert_eq!(
            config.docs_route_base_path,
            OneOrMany::Many(vec!["/dev/docs".to_string()])
        );
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = parse(
            r#"
docs_dir = "src/docs"
blog_dir = "src/blog"
highlight_search_terms_on_target_page = true
search_result_limits = 5
search_result_context_max_length = 30
"#,
        );
        assert_eq!(config.docs_dir, OneOrMany::One("src/docs".to_string()));
        assert_eq!(config.blog_dir, OneOrMany::One("src/blog".to_string()));
        assert!(config.highlight_search_terms_on_target_page);
        assert_eq!(config.search_result_context_max_length, 30);
        assert_eq!(config.blog_route_base_path.as_slice(), ["blog"]);
    }

    #[test]
    fn test_translations_override() {
        let config = parse(
            r#"
[translations]
search_placeholder = "搜索"
count_documents_found = "共找到 {{ count }} 篇文档"
count_documents_found_plural = "共找到 {{ count }} 篇文档"
"#,
        );
        assert_eq!(config.translations.search_placeholder, "搜索");
        assert_eq!(
            config
                .translations
                .translate_count("count_documents_found", 3)
                .unwrap(),
            "共找到 3 篇文档"
        );
        assert_eq!(config.translations.no_results, "No results.");
    }

    #[test]
    fn test_external_search_sources() {
        let config = parse(
            r#"
[[external_search_sources]]
heading = "API reference"
uri = "https://api.example.com"
"#,
        );
        assert_eq!(config.external_search_sources.len(), 1);
        assert_eq!(config.external_search_sources[0].heading, "API reference");
    }

    #[test]
    fn test_zero_limits_rejected() {
        let result = toml::from_str::<PluginOptions>("search_result_limits = 0")
            .expect("parse options")
            .normalize();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("search_result_limits")
        );
    }

    #[test]
    fn test_all_categories_disabled_is_valid() {
        let config = toml::from_str::<PluginOptions>(
            "index_docs = false\nindex_blog = false\nindex_pages = false",
        )
        .expect("parse options")
        .normalize()
        .expect("disabling everything is allowed");
        assert!(!config.indexes_anything());
    }

    #[test]
    fn test_malformed_base_path_rejected() {
        let result = toml::from_str::<PluginOptions>(r#"docs_route_base_path = ["docs//v2"]"#)
            .expect("parse options")
            .normalize();
        assert!(result.is_err());
    }

    #[test]
    fn test_ignore_file_matching() {
        let exact = IgnoreFile::from("file.md");
        assert!(exact.matches("file.md"));
        assert!(!exact.matches("docs/file.md"));

        let pattern = IgnoreFile::from(IgnorePattern::new("^__meta__").unwrap());
        assert!(pattern.matches("__meta__.md"));
        assert!(!pattern.matches("docs/__meta__.md"));
    }

    #[test]
    fn test_one_or_many_iteration() {
        let one = OneOrMany::One(1);
        let many = OneOrMany::Many(vec![1, 2, 3]);

        assert_eq!(one.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!((&many).into_iter().sum::<i32>(), 6);
        assert!(OneOrMany::<i32>::default().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("docsift.toml");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(
            br#"
index_pages = true
docs_route_base_path = ["docs", "api"]
"#,
        )
        .expect("write");

        let config = PluginConfig::load(&path).expect("load options");
        assert!(config.index_pages);
        assert_eq!(config.docs_route_base_path.as_slice(), ["docs", "api"]);
    }

    #[test]
    fn test_load_with_env_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("docsift.toml");
        std::fs::write(&path, "index_blog = false\nsearch_result_limits = 8\n").expect("write");

        let config = PluginOptions::load_with_env(&path)
            .expect("load options")
            .normalize()
            .expect("normalize options");
        assert!(!config.index_blog);
        assert_eq!(config.search_result_limits, 8);
    }

    #[test]
    fn test_load_not_found() {
        let result = PluginOptions::load(Path::new("/nonexistent/docsift.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
