//! Declarative descriptors for a catalog page.
//!
//! Descriptors are plain data. They carry no behavior beyond construction
//! helpers and are consumed by [`crate::build_page`].

use crate::readme::ReadmeContent;

/// One screenshot of a component on a single platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotDescriptor {
    /// Label shown above the image, usually the platform ("iOS", "Android")
    pub title: String,

    /// Declared width in pixels. Must be non-zero.
    pub width: u32,

    /// Declared height in pixels. Must be non-zero.
    pub height: u32,

    /// Resolved image URL
    pub src: String,

    /// Alternative text for the image
    pub alt_text: String,

    /// Optional caption, e.g. the device the screenshot was taken on
    pub sub_text: Option<String>,
}

/// A documented variant of a component.
///
/// `id` must be unique within its page; it becomes the section anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub screenshots: Vec<ScreenshotDescriptor>,
}

/// A block of introductory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurbBlock {
    /// Plain text, escaped when rendered
    Paragraph(String),

    /// Trusted, pre-rendered markup inserted verbatim
    Html(String),
}

impl BlurbBlock {
    /// Shorthand for [`BlurbBlock::Paragraph`].
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }
}

/// Top-level input to the page builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub title: String,
    pub blurb: Vec<BlurbBlock>,
    pub components: Vec<ComponentDescriptor>,
    pub readme: Option<ReadmeContent>,

    /// Render an in-page menu linking to each component section
    pub show_menu: bool,
}

impl PageDescriptor {
    /// Create an empty page with the menu enabled.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blurb: Vec::new(),
            components: Vec::new(),
            readme: None,
            show_menu: true,
        }
    }

    /// Total number of screenshots across all components.
    pub fn screenshot_count(&self) -> usize {
        self.components.iter().map(|c| c.screenshots.len()).sum()
    }
}
