//! Declarative catalog pages and the pure page builder.
//!
//! A page is described by a [`PageDescriptor`]: a title, introductory blurb,
//! documented components with their platform screenshots, and optional readme
//! content. [`build_page`] turns the descriptor into a [`PageTree`] for a
//! rendering host. Page modules can be written in Rust against an
//! [`AssetResolver`] or as YAML [`PageSource`] files.

pub mod assets;
pub mod builder;
pub mod descriptor;
pub mod readme;
pub mod source;
pub mod tree;

pub use assets::{AssetError, AssetResolver, MemoryAssets};
pub use builder::{anchor_for, build_page, PageBuilder};
pub use descriptor::{BlurbBlock, ComponentDescriptor, PageDescriptor, ScreenshotDescriptor};
pub use readme::{slugify, Heading, ReadmeContent, HEADING_ID_PREFIX};
pub use source::{parse_page_source, PageSource, PageSourceError};
pub use tree::{GalleryEntry, MenuEntry, Node, PageTree, Section};
