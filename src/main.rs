use anyhow::{Context, Result};
use cleansite::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let index_path = cleansite::build(&config)?;
    println!("Generated: {}", index_path.display());

    if !config.no_open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
