//! CSS asset bundling and artifact emission

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::DownloadAction;

const BASE: &str = include_str!("../assets/base.css");
const CONTENT: &str = include_str!("../assets/components/content.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");
const HOME_PAGE: &str = include_str!("../assets/page-home.css");

const DOWNLOAD_ARTIFACT: &str = include_str!("../assets/interpreter.py");

/// Writes bundled CSS assets to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "home.css", &[BASE, CONTENT, FOOTER, HOME_PAGE])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// Writes the downloadable artifact referenced by the download action.
///
/// The artifact is only emitted for [`DownloadAction::Asset`]; the inert
/// button variant leaves the output directory without it. The generator
/// never reads the artifact back, it is fetched read-only by browsing
/// clients.
pub fn write_download_artifact(output_dir: &Path, action: &DownloadAction) -> Result<()> {
    if let DownloadAction::Asset { target } = action {
        fs::write(output_dir.join(target), DOWNLOAD_ARTIFACT)
            .with_context(|| format!("Failed to write download artifact: {}", target))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DOWNLOAD_ASSET;
    use tempfile::TempDir;

    #[test]
    fn test_write_css_assets_bundles_namespaces() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp directory");

        // Act
        let result = write_css_assets(dir.path());

        // Assert
        assert!(result.is_ok(), "Should write bundled CSS");
        let css = fs::read_to_string(dir.path().join("home.css")).expect("Should read bundle");
        assert!(
            css.contains(".home-container"),
            "Bundle should include home namespace rules"
        );
        assert!(
            css.contains(".footer-container"),
            "Bundle should include footer namespace rules"
        );
    }

    #[test]
    fn test_write_download_artifact_asset_mode() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp directory");
        let action = DownloadAction::Asset {
            target: DOWNLOAD_ASSET.to_string(),
        };

        // Act
        let result = write_download_artifact(dir.path(), &action);

        // Assert
        assert!(result.is_ok(), "Should write artifact");
        let artifact = dir.path().join(DOWNLOAD_ASSET);
        assert!(artifact.exists(), "Artifact should exist in output");
        let body = fs::read_to_string(&artifact).expect("Should read artifact");
        assert!(!body.is_empty(), "Artifact should not be empty");
    }

    #[test]
    fn test_write_download_artifact_button_mode() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp directory");

        // Act
        let result = write_download_artifact(dir.path(), &DownloadAction::Button);

        // Assert
        assert!(result.is_ok(), "Button mode should be a no-op");
        assert!(
            !dir.path().join(DOWNLOAD_ASSET).exists(),
            "Button mode should not emit an artifact"
        );
    }
}
