//! The generic icon component.

use std::collections::BTreeMap;

use crate::shape::IconShape;
use crate::IconError;

/// Options accepted by [`render_icon`].
///
/// `class_name`, `title` and `style` are recognised and placed explicitly.
/// Anything else goes into the pass-through attributes, which are written onto
/// the `<svg>` element in insertion order. A pass-through attribute with the
/// same name as a generated one (e.g. `width`) replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconOptions {
    pub class_name: Option<String>,

    /// Accessible title, rendered as a `<title>` child
    pub title: Option<String>,

    /// Style declarations merged over the default width/height
    pub style: BTreeMap<String, String>,

    attributes: Vec<(String, String)>,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Add a pass-through attribute.
    ///
    /// Names must be valid XML attribute names; values are escaped on output.
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, IconError> {
        let name = name.into();
        if !is_attribute_name(&name) {
            return Err(IconError::InvalidAttribute(name));
        }
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        Ok(self)
    }

    /// Pass-through attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

/// Render an icon shape as an SVG element.
pub fn render_icon(shape: &IconShape, options: &IconOptions) -> String {
    let px = shape.size.pixels().to_string();

    let mut attrs: Vec<(String, String)> = vec![
        ("xmlns".to_string(), "http://www.w3.org/2000/svg".to_string()),
        ("width".to_string(), px.clone()),
        ("height".to_string(), px),
        ("viewBox".to_string(), shape.view_box.clone()),
        ("style".to_string(), style_attribute(shape, options)),
    ];

    if let Some(class) = &options.class_name {
        attrs.push(("class".to_string(), class.clone()));
    }

    for (name, value) in &options.attributes {
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = value.clone(),
            None => attrs.push((name.clone(), value.clone())),
        }
    }

    if options.title.is_some() && !attrs.iter().any(|(n, _)| n == "role") {
        attrs.push(("role".to_string(), "img".to_string()));
    }

    let attr_string: String = attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attr(value)))
        .collect();

    let title = options
        .title
        .as_ref()
        .map(|t| format!("<title>{}</title>", escape_text(t)))
        .unwrap_or_default();

    let paths: String = shape
        .paths
        .iter()
        .map(|d| format!("<path d=\"{}\"/>", escape_attr(d)))
        .collect();

    format!("<svg{}>{}{}</svg>", attr_string, title, paths)
}

/// Default `width`/`height` declarations, overridden or extended by `options.style`.
fn style_attribute(shape: &IconShape, options: &IconOptions) -> String {
    let rem = shape.size.rem();
    let mut declarations: Vec<(&str, &str)> = vec![("width", rem), ("height", rem)];

    for (property, value) in &options.style {
        match declarations.iter_mut().find(|(p, _)| *p == property.as_str()) {
            Some(existing) => existing.1 = value.as_str(),
            None => declarations.push((property.as_str(), value.as_str())),
        }
    }

    declarations
        .iter()
        .map(|(p, v)| format!("{}:{}", p, v))
        .collect::<Vec<_>>()
        .join(";")
}

fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::SizeClass;
    use pretty_assertions::assert_eq;

    fn square(size: SizeClass) -> IconShape {
        IconShape::new("square", size, vec!["M0 0h10v10H0z".to_string()])
    }

    #[test]
    fn renders_with_size_class_defaults() {
        let svg = render_icon(&square(SizeClass::Lg), &IconOptions::new());

        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" "#,
                r#"viewBox="0 0 24 24" style="width:1.5rem;height:1.5rem">"#,
                r#"<path d="M0 0h10v10H0z"/></svg>"#
            )
        );
    }

    #[test]
    fn small_icons_use_small_dimensions() {
        let svg = render_icon(&square(SizeClass::Sm), &IconOptions::new());

        assert!(svg.contains(r#"width="16" height="16""#));
        assert!(svg.contains("width:1rem;height:1rem"));
    }

    #[test]
    fn merges_style_over_defaults() {
        let options = IconOptions::new().style("width", "2rem").style("fill", "red");

        let svg = render_icon(&square(SizeClass::Lg), &options);

        assert!(svg.contains(r#"style="width:2rem;height:1.5rem;fill:red""#));
    }

    #[test]
    fn forwards_pass_through_attributes() {
        let options = IconOptions::new()
            .class_name("icon")
            .attribute("data-testid", "star")
            .unwrap()
            .attribute("aria-label", "Say \"hi\" & <wave>")
            .unwrap();

        let svg = render_icon(&square(SizeClass::Lg), &options);

        assert!(svg.contains(
            r#" class="icon" data-testid="star" aria-label="Say &quot;hi&quot; &amp; &lt;wave&gt;">"#
        ));
    }

    #[test]
    fn pass_through_overrides_generated_attributes() {
        let options = IconOptions::new().attribute("width", "48").unwrap();

        let svg = render_icon(&square(SizeClass::Lg), &options);

        assert!(svg.contains(r#"width="48" height="24""#));
        assert_eq!(svg.matches("width=").count(), 1);
    }

    #[test]
    fn renders_accessible_title() {
        let options = IconOptions::new().title("Paid <now>");

        let svg = render_icon(&square(SizeClass::Lg), &options);

        assert!(svg.contains(r#" role="img">"#));
        assert!(svg.contains("<title>Paid &lt;now&gt;</title><path"));
    }

    #[test]
    fn rejects_invalid_attribute_names() {
        assert!(matches!(
            IconOptions::new().attribute("on\"click", "x"),
            Err(IconError::InvalidAttribute(_))
        ));
        assert!(IconOptions::new().attribute("", "x").is_err());
        assert!(IconOptions::new().attribute("xlink:href", "#a").is_ok());
    }

    #[test]
    fn repeated_attribute_keeps_last_value() {
        let options = IconOptions::new()
            .attribute("fill", "red")
            .unwrap()
            .attribute("fill", "blue")
            .unwrap();

        assert_eq!(
            options.attributes(),
            &[("fill".to_string(), "blue".to_string())]
        );
    }
}
