//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// File name of the downloadable artifact emitted next to the page.
pub const DOWNLOAD_ASSET: &str = "interpreter.py";

/// Form of the second action in the landing page action row.
///
/// The page ships in two observed variants: a real file-download link and
/// an inert visual button. The variant is a configuration input rather
/// than a hardcoded choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadAction {
    /// Download link pointing at a static asset emitted alongside the page
    Asset { target: String },
    /// Non-navigating button with no behavior attached
    Button,
}

/// Command line configuration for cleansite.
#[derive(Debug, Clone, Parser)]
#[command(name = "cleansite", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Render the download action as an inert button instead of a file link
    #[arg(long)]
    pub inert_button: bool,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the output path exists and is not a directory.
    pub fn validate(&self) -> Result<()> {
        if self.output.exists() && !self.output.is_dir() {
            bail!(
                "Output path exists and is not a directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Returns the configured form of the download action.
    pub fn download_action(&self) -> DownloadAction {
        if self.inert_button {
            DownloadAction::Button
        } else {
            DownloadAction::Asset {
                target: DOWNLOAD_ASSET.to_string(),
            }
        }
    }
}
