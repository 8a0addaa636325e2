//! Extract command - build the document bundle for a finished site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use docsift_core::BuildManifest;
use docsift_indexer::{DocumentBundle, Indexer};

use super::load_config;

/// Run the extract command.
///
/// Resolves and extracts every indexable page of the build and writes the
/// documents to `output`.
pub fn run(config_path: &Path, manifest_path: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?manifest_path, ?output, "Starting extraction");

    let config = load_config(config_path)?;
    let manifest = BuildManifest::load(manifest_path).wrap_err("Failed to load build manifest")?;

    let result = Indexer::new(config)
        .run(&manifest)
        .wrap_err("Extraction failed")?;
    let stats = result.stats;

    DocumentBundle::new(result.documents)
        .write_to_file(output)
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    let duration = start.elapsed();

    println!();
    println!("  Extraction completed!");
    println!();
    println!("  Routes:       {}", stats.routes);
    println!("  Resolved:     {}", stats.resolved);
    println!("  Extracted:    {}", stats.extracted);
    println!("  Failed:       {}", stats.failed);
    println!("  Missing main: {}", stats.missing_main);
    println!("  Empty:        {}", stats.empty);
    println!();
    println!("  Duration:     {:.2}s", duration.as_secs_f64());
    println!("  Output:       {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Extraction completed");

    Ok(())
}
