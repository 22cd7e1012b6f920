//! Asset resolution seam used by page modules.

use std::collections::HashMap;

use crate::readme::ReadmeContent;

/// Resolves logical asset paths into URLs and readme content.
///
/// Page modules receive a resolver instead of importing assets directly, so the
/// same page can be built against a real asset directory or an in-memory table.
pub trait AssetResolver: Send + Sync {
    /// Resolve an image path to the URL that should appear in `src`.
    fn resolve_image(&self, path: &str) -> Result<String, AssetError>;

    /// Load and render a readme.
    fn resolve_readme(&self, path: &str) -> Result<ReadmeContent, AssetError>;
}

/// Errors that can occur when resolving an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to read asset {path}: {message}")]
    ReadError { path: String, message: String },
}

/// An in-memory resolver.
///
/// Images resolve to `"{prefix}{path}"` when registered; readmes are stored as
/// markdown and rendered on lookup.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    prefix: String,
    images: HashMap<String, String>,
    readmes: HashMap<String, String>,
}

impl MemoryAssets {
    /// Create an empty resolver that prefixes image paths with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Register an image path.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        let url = format!("{}{}", self.prefix, path);
        self.images.insert(path, url);
        self
    }

    /// Register a readme by path with markdown source.
    pub fn with_readme(mut self, path: impl Into<String>, markdown: impl Into<String>) -> Self {
        self.readmes.insert(path.into(), markdown.into());
        self
    }
}

impl AssetResolver for MemoryAssets {
    fn resolve_image(&self, path: &str) -> Result<String, AssetError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    fn resolve_readme(&self, path: &str) -> Result<ReadmeContent, AssetError> {
        self.readmes
            .get(path)
            .map(|source| ReadmeContent::from_markdown(source))
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_images() {
        let assets = MemoryAssets::new("/").with_image("ios/default.png");

        assert_eq!(
            assets.resolve_image("ios/default.png").unwrap(),
            "/ios/default.png"
        );
        assert!(matches!(
            assets.resolve_image("android/default.png"),
            Err(AssetError::NotFound(p)) if p == "android/default.png"
        ));
    }

    #[test]
    fn renders_registered_readmes() {
        let assets = MemoryAssets::new("/").with_readme("readme.md", "# Title");

        let readme = assets.resolve_readme("readme.md").unwrap();

        assert!(readme.html().contains("Title</h1>"));
        assert!(assets.resolve_readme("missing.md").is_err());
    }
}
