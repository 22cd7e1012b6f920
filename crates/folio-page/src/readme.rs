//! Readme loading: markdown to an opaque block of rendered content.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Pre-rendered readme content.
///
/// The page builder treats this as an opaque block and inserts it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeContent {
    html: String,
    headings: Vec<Heading>,
}

/// A heading found while rendering a readme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

impl ReadmeContent {
    /// Wrap markup that has already been rendered and is trusted.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            headings: Vec::new(),
        }
    }

    /// Render markdown, giving every heading without an explicit id a slug anchor.
    ///
    /// Generated anchors start with [`HEADING_ID_PREFIX`], keeping them apart
    /// from component section anchors.
    pub fn from_markdown(source: &str) -> Self {
        let options = markdown_options();

        // First pass collects heading text so ids can be assigned on the second.
        let mut headings = Vec::new();
        let mut current: Option<(u8, Option<String>, String)> = None;

        for event in Parser::new_ext(source, options) {
            match event {
                Event::Start(Tag::Heading { level, id, .. }) => {
                    current = Some((level as u8, id.map(|id| id.to_string()), String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, _, ref mut title)) = current {
                        title.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, explicit, title)) = current.take() {
                        let id = explicit.unwrap_or_else(|| {
                            format!("{}{}", HEADING_ID_PREFIX, slugify(&title))
                        });
                        headings.push(Heading { title, id, level });
                    }
                }
                _ => {}
            }
        }

        let mut ids = headings.iter().map(|h| h.id.clone());
        let events = Parser::new_ext(source, options).map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                let id = ids.next().map(CowStr::from).or(id);
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                })
            }
            other => other,
        });

        let mut output = String::new();
        html::push_html(&mut output, events);

        Self {
            html: output,
            headings,
        }
    }

    /// Rendered markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Headings in document order. Empty for content built from HTML.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }
}

/// Prefix of heading anchors generated from heading text.
pub const HEADING_ID_PREFIX: &str = "readme-";

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Convert a heading to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
