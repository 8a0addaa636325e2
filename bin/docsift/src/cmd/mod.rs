//! Command implementations.

pub mod check;
pub mod extract;
pub mod resolve;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docsift_core::{PluginConfig, PluginOptions};

/// Load and normalize plugin options, with `DOCSIFT__*` environment
/// overrides.
///
/// A missing options file means the plugin was registered without options,
/// so every field takes its default.
pub fn load_config(config_path: &Path) -> Result<PluginConfig> {
    let options = if config_path.exists() {
        PluginOptions::load_with_env(config_path).wrap_err("Failed to load options file")?
    } else {
        tracing::info!(?config_path, "Options file not found, using defaults");
        PluginOptions::default()
    };

    let config = options.normalize().wrap_err("Invalid plugin options")?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
