//! Scaffold a catalog in a project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the init command in the current directory.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let created = scaffold(Path::new("."), config_path, yes)?;
    if created.is_empty() {
        tracing::warn!("Nothing created. Use --yes to overwrite existing files.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio build' to generate the site.");

    Ok(())
}

/// Write the starter files under `root`. Returns the files written.
pub fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let files = [
        (config_path.to_path_buf(), DEFAULT_CONFIG.to_string()),
        (PathBuf::from("pages/star-rating.yaml"), DEFAULT_PAGE.to_string()),
        (
            PathBuf::from("assets/star-rating/readme.md"),
            DEFAULT_README.to_string(),
        ),
        (
            PathBuf::from("assets/star-rating/screenshots/ios/default.svg"),
            placeholder(750, 1334, "iOS"),
        ),
        (
            PathBuf::from("assets/star-rating/screenshots/android/default.svg"),
            placeholder(1080, 1920, "Android"),
        ),
    ];

    let mut created = Vec::new();

    for (relative, contents) in files {
        let path = root.join(&relative);
        if path.exists() && !overwrite {
            tracing::warn!("{} already exists, skipping", path.display());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", relative.display());
        created.push(path);
    }

    Ok(created)
}

/// A neutral placeholder image with the screenshot's declared dimensions.
fn placeholder(width: u32, height: u32, label: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="#f1f2f8"/><text x="50%" y="50%" text-anchor="middle" font-family="sans-serif" font-size="64" fill="#545860">{label}</text></svg>"##,
        w = width,
        h = height,
        label = label
    )
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Directory of YAML page sources
pages = "pages"

# Directory that screenshot and readme paths resolve against
assets = "assets"

# Output directory for built site
output = "dist"

# Site title
title = "My Component Catalog"

# Base URL (for deployment)
base_url = "/"

[icons]
# Extra icon artwork laid out as <size>/<name>.svg
# dir = "icons"

[build]
# Enable CSS minification
minify = true
"#;

const DEFAULT_PAGE: &str = r#"title: Star Ratings
description: Displaying a score within a given range
blurb:
  - Star ratings are used for displaying a score within a given range.
readme: star-rating/readme.md
show_menu: false
components:
  - id: default
    title: Default
    blurb: By default, star ratings are shown in a static form. These can be set at half star intervals.
    screenshots:
      - title: iOS
        width: 750
        height: 1334
        src: star-rating/screenshots/ios/default.svg
        alt_text: iOS Default Star Rating Component
        sub_text: (iPhone 8 Simulator)
      - title: Android
        width: 1080
        height: 1920
        src: star-rating/screenshots/android/default.svg
        alt_text: Android Default Star Rating Component
        sub_text: (Google Pixel Emulator)
"#;

const DEFAULT_README: &str = r#"# Star rating

## Installation

```sh
npm install react-native-bpk-component-star-rating --save-dev
```

## Props

| Property | PropType | Required | Default Value |
| -------- | -------- | -------- | ------------- |
| rating   | number   | false    | 0             |
| maxRating| number   | false    | 5             |
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scaffolds_starter_catalog() {
        let temp = tempdir().unwrap();

        let created = scaffold(temp.path(), Path::new("folio.toml"), false).unwrap();

        assert_eq!(created.len(), 5);
        assert!(temp.path().join("pages/star-rating.yaml").exists());
        let svg =
            fs::read_to_string(temp.path().join("assets/star-rating/screenshots/ios/default.svg"))
                .unwrap();
        assert!(svg.contains(r#"width="750" height="1334""#));
    }

    #[test]
    fn keeps_existing_files_without_overwrite() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("folio.toml"), "# mine").unwrap();

        let created = scaffold(temp.path(), Path::new("folio.toml"), false).unwrap();

        assert_eq!(created.len(), 4);
        assert_eq!(
            fs::read_to_string(temp.path().join("folio.toml")).unwrap(),
            "# mine"
        );

        let created = scaffold(temp.path(), Path::new("folio.toml"), true).unwrap();
        assert_eq!(created.len(), 5);
    }

    #[test]
    fn scaffolded_catalog_builds() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), Path::new("folio.toml"), false).unwrap();

        let content = fs::read_to_string(temp.path().join("folio.toml")).unwrap();
        let mut config = crate::config::parse_config(&content)
            .unwrap()
            .build_config(Some(temp.path().join("dist")), None);
        config.pages_dir = temp.path().join(&config.pages_dir);
        config.assets_dir = temp.path().join(&config.assets_dir);

        let result = folio_static::StaticBuilder::new(config).build().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.screenshots, 2);
        assert!(temp
            .path()
            .join("dist/assets/star-rating/screenshots/ios/default.svg")
            .exists());
    }

    #[test]
    fn default_config_parses() {
        let config = crate::config::parse_config(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.site.title, "My Component Catalog");
        assert!(config.icons.dir.is_none());
    }
}
