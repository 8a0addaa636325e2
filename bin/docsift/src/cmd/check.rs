//! Check command - validate the plugin options

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use docsift_core::{PluginConfig, PluginOptions};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Loads and normalizes the options file and reports settings that would
/// make the index surprising.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking plugin options");

    let mut result = ValidationResult::default();

    println!("Checking options...");
    let options = if config_path.exists() {
        match PluginOptions::load_with_env(config_path) {
            Ok(o) => Some(o),
            Err(e) => {
                result.add_error(format!("Options error: {e}"));
                println!("  ✗ Options file invalid: {e}");
                None
            }
        }
    } else {
        result.add_warning(format!(
            "Options file {} not found, defaults apply",
            config_path.display()
        ));
        println!("  ⚠ {} not found, using defaults", config_path.display());
        Some(PluginOptions::default())
    };

    let config = options.and_then(|o| match o.normalize() {
        Ok(c) => {
            println!("  ✓ Options valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Invalid options: {e}"));
            println!("  ✗ Options invalid: {e}");
            None
        }
    });

    if let Some(ref cfg) = config {
        println!("\nChecking option values...");
        check_config_values(cfg, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check option values for common issues.
fn check_config_values(config: &PluginConfig, result: &mut ValidationResult) {
    if !config.indexes_anything() {
        result.add_warning("index_docs, index_blog and index_pages are all disabled");
    }

    if config.index_docs && config.docs_route_base_path.is_empty() {
        result.add_warning("index_docs is enabled but docs_route_base_path is empty");
    }

    if config.index_blog && config.blog_route_base_path.is_empty() {
        result.add_warning("index_blog is enabled but blog_route_base_path is empty");
    }

    let trim = |p: &String| p.trim_matches('/').to_string();
    let docs: Vec<String> = config.docs_route_base_path.iter().map(trim).collect();
    for blog in config.blog_route_base_path.iter().map(trim) {
        if docs.contains(&blog) {
            result.add_warning(format!(
                "Route prefix {blog:?} is used by both docs and blog; docs wins"
            ));
        }
    }

    for source in &config.external_search_sources {
        if source.heading.trim().is_empty() || source.uri.trim().is_empty() {
            result.add_warning(format!(
                "External search source needs both heading and uri: {source:?}"
            ));
        }
    }

    for id in ["count_documents_found", "count_documents_found_plural"] {
        let rendered = config
            .translations
            .translate(id, &[("count", "7")])
            .unwrap_or_default();
        if !rendered.contains('7') {
            result.add_warning(format!("Translation {id} has no {{{{ count }}}} placeholder"));
        }
    }

    println!("  ✓ Option values checked");
}
