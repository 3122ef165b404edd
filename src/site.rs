//! Site build orchestration

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::assets;
use crate::config::Config;
use crate::pages;

/// Builds the landing site into the configured output directory.
///
/// Creates the output directory, writes bundled CSS, emits the download
/// artifact when the download action references one, renders the home
/// page, and writes `index.html`.
///
/// # Arguments
///
/// * `config`: Parsed command line configuration
///
/// # Returns
///
/// Path to the generated `index.html`
///
/// # Errors
///
/// Returns error if the output directory or any generated file cannot be
/// written.
pub fn build(config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    assets::write_css_assets(&assets_dir)?;

    let action = config.download_action();
    assets::write_download_artifact(&config.output, &action)?;

    let html = pages::home::generate(&action);
    let index_path = config.output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write index page to {}", index_path.display()))?;

    Ok(index_path)
}
