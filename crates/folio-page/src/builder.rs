//! The page builder: descriptor in, page tree out.

use crate::descriptor::{BlurbBlock, ComponentDescriptor, PageDescriptor, ScreenshotDescriptor};
use crate::tree::{GalleryEntry, MenuEntry, Node, PageTree, Section};

/// Build the renderable tree for a page.
///
/// The output is a pure function of `page`. Component ids are used as anchors
/// without checking them for uniqueness, and screenshot dimensions are passed
/// through as declared.
pub fn build_page(page: &PageDescriptor) -> PageTree {
    let mut nodes = Vec::with_capacity(page.blurb.len() + page.components.len() + 3);

    if page.show_menu {
        nodes.push(Node::Menu {
            entries: page.components.iter().map(menu_entry).collect(),
        });
    }

    nodes.push(Node::Title {
        text: page.title.clone(),
    });

    nodes.extend(page.blurb.iter().map(|block| match block {
        BlurbBlock::Paragraph(text) => Node::Paragraph { text: text.clone() },
        BlurbBlock::Html(html) => Node::Markup { html: html.clone() },
    }));

    nodes.extend(page.components.iter().map(|c| Node::Section(section(c))));

    if let Some(readme) = &page.readme {
        nodes.push(Node::Readme {
            html: readme.html().to_string(),
        });
    }

    PageTree { nodes }
}

/// Anchor used to link to a component section.
pub fn anchor_for(id: &str) -> String {
    id.to_string()
}

fn menu_entry(component: &ComponentDescriptor) -> MenuEntry {
    MenuEntry {
        title: component.title.clone(),
        anchor: anchor_for(&component.id),
    }
}

fn section(component: &ComponentDescriptor) -> Section {
    Section {
        anchor: anchor_for(&component.id),
        title: component.title.clone(),
        blurb: component.blurb.clone(),
        gallery: component.screenshots.iter().map(gallery_entry).collect(),
    }
}

fn gallery_entry(shot: &ScreenshotDescriptor) -> GalleryEntry {
    GalleryEntry {
        title: shot.title.clone(),
        src: shot.src.clone(),
        alt: shot.alt_text.clone(),
        caption: shot.sub_text.clone(),
        width: shot.width,
        height: shot.height,
    }
}

/// Object form of [`build_page`], for hosts that hold a builder value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageBuilder;

impl PageBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, page: &PageDescriptor) -> PageTree {
        build_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readme::ReadmeContent;
    use pretty_assertions::assert_eq;

    fn shot(title: &str) -> ScreenshotDescriptor {
        ScreenshotDescriptor {
            title: title.to_string(),
            width: 750,
            height: 1334,
            src: format!("/img/{}.png", title.to_lowercase()),
            alt_text: format!("{} <Default> & more", title),
            sub_text: None,
        }
    }

    fn component(id: &str, screenshots: Vec<ScreenshotDescriptor>) -> ComponentDescriptor {
        ComponentDescriptor {
            id: id.to_string(),
            title: id.to_uppercase(),
            blurb: format!("About {}", id),
            screenshots,
        }
    }

    fn sample_page() -> PageDescriptor {
        PageDescriptor {
            title: "Buttons".to_string(),
            blurb: vec![
                BlurbBlock::paragraph("First."),
                BlurbBlock::Html("<em>Second.</em>".to_string()),
            ],
            components: vec![
                component("primary", vec![shot("iOS"), shot("Android")]),
                component("secondary", vec![shot("iOS")]),
            ],
            readme: Some(ReadmeContent::from_html("<p>readme</p>")),
            show_menu: true,
        }
    }

    #[test]
    fn builds_nodes_in_order() {
        let tree = build_page(&sample_page());

        let kinds: Vec<&str> = tree
            .nodes
            .iter()
            .map(|n| match n {
                Node::Menu { .. } => "menu",
                Node::Title { .. } => "title",
                Node::Paragraph { .. } => "paragraph",
                Node::Markup { .. } => "markup",
                Node::Section(_) => "section",
                Node::Readme { .. } => "readme",
            })
            .collect();

        assert_eq!(
            kinds,
            vec!["menu", "title", "paragraph", "markup", "section", "section", "readme"]
        );
        assert_eq!(tree.readme(), Some("<p>readme</p>"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let page = sample_page();
        assert_eq!(build_page(&page), build_page(&page));
    }

    #[test]
    fn menu_lists_components_in_order() {
        let tree = build_page(&sample_page());
        let menu = tree.menu().unwrap();

        assert_eq!(
            menu,
            &[
                MenuEntry {
                    title: "PRIMARY".to_string(),
                    anchor: "primary".to_string(),
                },
                MenuEntry {
                    title: "SECONDARY".to_string(),
                    anchor: "secondary".to_string(),
                },
            ]
        );
    }

    #[test]
    fn hides_menu_when_disabled() {
        let mut page = sample_page();
        page.show_menu = false;

        let tree = build_page(&page);

        assert!(tree.menu().is_none());
        assert!(matches!(tree.nodes[0], Node::Title { .. }));
    }

    #[test]
    fn empty_page_has_no_sections() {
        let mut page = PageDescriptor::new("Empty");
        page.show_menu = true;

        let tree = build_page(&page);

        assert_eq!(tree.sections().count(), 0);
        assert_eq!(tree.menu(), Some(&[][..]));
        assert_eq!(tree.title(), Some("Empty"));
        assert!(tree.readme().is_none());
    }

    #[test]
    fn component_without_screenshots_has_empty_gallery() {
        let mut page = PageDescriptor::new("Bare");
        page.components.push(component("bare", vec![]));

        let tree = build_page(&page);
        let section = tree.sections().next().unwrap();

        assert_eq!(section.title, "BARE");
        assert_eq!(section.blurb, "About bare");
        assert!(section.gallery.is_empty());
    }

    #[test]
    fn copies_screenshot_fields_verbatim() {
        let mut captioned = shot("iOS");
        captioned.sub_text = Some("  (iPhone 8 Simulator)  ".to_string());

        let mut page = PageDescriptor::new("Fields");
        page.components.push(component("one", vec![captioned.clone()]));

        let tree = build_page(&page);
        let entry = &tree.sections().next().unwrap().gallery[0];

        assert_eq!(entry.title, captioned.title);
        assert_eq!(entry.alt, captioned.alt_text);
        assert_eq!(entry.caption, captioned.sub_text);
        assert_eq!(entry.src, captioned.src);
        assert_eq!((entry.width, entry.height), (750, 1334));
    }

    #[test]
    fn duplicate_ids_are_passed_through() {
        let mut page = PageDescriptor::new("Dupes");
        page.components.push(component("same", vec![]));
        page.components.push(component("same", vec![]));

        let tree = build_page(&page);
        let anchors: Vec<&str> = tree.sections().map(|s| s.anchor.as_str()).collect();

        assert_eq!(anchors, vec!["same", "same"]);
    }

    #[test]
    fn builder_value_matches_function() {
        let page = sample_page();
        assert_eq!(PageBuilder::new().build(&page), build_page(&page));
    }
}
