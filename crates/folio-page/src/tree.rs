//! Renderable page tree handed to a rendering host.

use serde::Serialize;

/// A rendered page: an ordered list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTree {
    pub nodes: Vec<Node>,
}

/// A single node of a page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// In-page navigation listing every section
    Menu { entries: Vec<MenuEntry> },

    /// Page heading
    Title { text: String },

    /// Plain text paragraph
    Paragraph { text: String },

    /// Trusted markup inserted as-is
    Markup { html: String },

    /// One documented component
    Section(Section),

    /// Pre-rendered readme content
    Readme { html: String },
}

/// A link in the in-page menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: String,
    pub anchor: String,
}

/// A component section with its screenshot gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Element id, derived from the component id
    pub anchor: String,
    pub title: String,
    pub blurb: String,
    pub gallery: Vec<GalleryEntry>,
}

/// A screenshot inside a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub title: String,
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,

    /// Intrinsic sizing hints, not enforced
    pub width: u32,
    pub height: u32,
}

impl PageTree {
    /// The in-page menu, if one was rendered.
    pub fn menu(&self) -> Option<&[MenuEntry]> {
        self.nodes.iter().find_map(|node| match node {
            Node::Menu { entries } => Some(entries.as_slice()),
            _ => None,
        })
    }

    /// The page heading.
    pub fn title(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            Node::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Component sections in page order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Section(section) => Some(section),
            _ => None,
        })
    }

    /// The readme markup, if present.
    pub fn readme(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            Node::Readme { html } => Some(html.as_str()),
            _ => None,
        })
    }
}
