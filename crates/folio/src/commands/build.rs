//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_static::StaticBuilder;

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let config = load_config(config_path)?.build_config(output, minify);

    let result = StaticBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages with {} components and {} screenshots in {}ms",
        result.pages,
        result.components,
        result.screenshots,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
