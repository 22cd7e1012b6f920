//! Static site generator for folio documentation.
//!
//! Builds a static catalog site from YAML page sources, rendering each page
//! tree to HTML alongside an icon gallery.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::{AssetPipeline, DirAssetResolver};
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use templates::{Context, IconTile, NavItem, TemplateEngine};
