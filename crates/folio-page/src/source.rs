//! Page sources: page modules written as YAML.
//!
//! A page source mirrors [`PageDescriptor`] but refers to assets by logical
//! path. Resolving it against an [`AssetResolver`] yields the descriptor.

use serde::Deserialize;

use crate::assets::{AssetError, AssetResolver};
use crate::descriptor::{BlurbBlock, ComponentDescriptor, PageDescriptor, ScreenshotDescriptor};

/// A parsed page source file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageSource {
    /// Page title (required)
    pub title: String,

    /// Page description for the search index
    #[serde(default)]
    pub description: Option<String>,

    /// Introductory blocks
    #[serde(default)]
    pub blurb: Vec<BlurbSource>,

    /// Documented components, in page order
    #[serde(default)]
    pub components: Vec<ComponentSource>,

    /// Logical path of the readme
    #[serde(default)]
    pub readme: Option<String>,

    /// Whether to render the in-page menu
    #[serde(default = "default_true", alias = "showMenu")]
    pub show_menu: bool,

    /// Order in navigation (lower = first)
    #[serde(default)]
    pub order: Option<i32>,

    /// Whether to show in site navigation
    #[serde(default = "default_true")]
    pub nav: bool,

    /// Custom slug override
    #[serde(default)]
    pub slug: Option<String>,
}

/// A blurb block: a bare string is a paragraph, `{ html: ... }` is markup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BlurbSource {
    Paragraph(String),
    Html { html: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentSource {
    pub id: String,
    pub title: String,
    pub blurb: String,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotSource>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScreenshotSource {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Logical image path
    pub src: String,
    #[serde(alias = "altText")]
    pub alt_text: String,
    #[serde(default, alias = "subText")]
    pub sub_text: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading a page source.
#[derive(Debug, thiserror::Error)]
pub enum PageSourceError {
    #[error("Invalid YAML in page source: {0}")]
    InvalidYaml(String),

    #[error("Failed to resolve asset for component '{component}': {source}")]
    ComponentAsset {
        component: String,
        #[source]
        source: AssetError,
    },

    #[error("Failed to resolve readme: {0}")]
    Readme(#[source] AssetError),
}

/// Parse a YAML page source.
pub fn parse_page_source(source: &str) -> Result<PageSource, PageSourceError> {
    serde_yaml::from_str(source).map_err(|e| PageSourceError::InvalidYaml(e.to_string()))
}

impl PageSource {
    /// Resolve every asset reference and produce the page descriptor.
    pub fn resolve(&self, assets: &dyn AssetResolver) -> Result<PageDescriptor, PageSourceError> {
        let components = self
            .components
            .iter()
            .map(|component| {
                component
                    .resolve(assets)
                    .map_err(|source| PageSourceError::ComponentAsset {
                        component: component.id.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let readme = self
            .readme
            .as_deref()
            .map(|path| assets.resolve_readme(path))
            .transpose()
            .map_err(PageSourceError::Readme)?;

        Ok(PageDescriptor {
            title: self.title.clone(),
            blurb: self.blurb.iter().map(BlurbSource::to_block).collect(),
            components,
            readme,
            show_menu: self.show_menu,
        })
    }

    /// Logical paths of every screenshot referenced by this page.
    pub fn image_paths(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .flat_map(|c| c.screenshots.iter().map(|s| s.src.as_str()))
    }
}

impl BlurbSource {
    fn to_block(&self) -> BlurbBlock {
        match self {
            Self::Paragraph(text) => BlurbBlock::Paragraph(text.clone()),
            Self::Html { html } => BlurbBlock::Html(html.clone()),
        }
    }
}

impl ComponentSource {
    fn resolve(&self, assets: &dyn AssetResolver) -> Result<ComponentDescriptor, AssetError> {
        let screenshots = self
            .screenshots
            .iter()
            .map(|shot| -> Result<ScreenshotDescriptor, AssetError> {
                Ok(ScreenshotDescriptor {
                    title: shot.title.clone(),
                    width: shot.width,
                    height: shot.height,
                    src: assets.resolve_image(&shot.src)?,
                    alt_text: shot.alt_text.clone(),
                    sub_text: shot.sub_text.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ComponentDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            blurb: self.blurb.clone(),
            screenshots,
        })
    }
}
