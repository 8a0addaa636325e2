//! Resolve command - print the documents a build would index

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docsift_core::BuildManifest;
use docsift_indexer::Indexer;

use super::load_config;

/// Run the resolve command.
///
/// Classifies every route of the manifest and prints the kept descriptors
/// as pretty JSON on stdout. No page is read.
pub fn run(config_path: &Path, manifest_path: &Path) -> Result<()> {
    tracing::info!(?config_path, ?manifest_path, "Resolving routes");

    let config = load_config(config_path)?;
    let manifest = BuildManifest::load(manifest_path).wrap_err("Failed to load build manifest")?;

    let descriptors = Indexer::new(config).resolve(&manifest);
    tracing::info!(
        routes = manifest.routes.len(),
        resolved = descriptors.len(),
        "Resolved routes"
    );

    let json =
        serde_json::to_string_pretty(&descriptors).wrap_err("Failed to serialize descriptors")?;
    println!("{json}");

    Ok(())
}
