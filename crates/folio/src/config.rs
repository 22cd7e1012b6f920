//! Configuration file structure (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_static::BuildConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_pages_dir")]
    pub pages: String,
    #[serde(default = "default_assets_dir")]
    pub assets: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Paths to CSS stylesheets to include
    pub styles: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages: default_pages_dir(),
            assets: default_assets_dir(),
            output: default_output(),
            title: default_title(),
            base_url: default_base_url(),
            styles: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct IconsConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_pages_dir() -> String {
    "pages".to_string()
}
fn default_assets_dir() -> String {
    "assets".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Documentation".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = parse_config(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

impl ConfigFile {
    /// Merge file settings with command-line overrides.
    pub fn build_config(self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            pages_dir: PathBuf::from(&self.site.pages),
            assets_dir: PathBuf::from(&self.site.assets),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            icons_dir: self.icons.dir.map(PathBuf::from),
            minify: minify.unwrap_or(self.build.minify),
            base_url: self.site.base_url,
            title: self.site.title,
            styles: self.site.styles.unwrap_or_default(),
        }
    }
}
