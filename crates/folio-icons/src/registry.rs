//! Icon registry: the lookup table from (size, name) to shape.
//!
//! Starts with the built-in shapes and can be extended by scanning a
//! directory laid out as `<size>/<name>.svg`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::icon::{render_icon, IconOptions};
use crate::shape::{IconShape, SizeClass, BUILTIN_SHAPES};
use crate::IconError;

/// A table of icon shapes.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    shapes: BTreeMap<(SizeClass, String), IconShape>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRegistry {
    /// Create a registry holding the built-in shapes.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (size, name, path) in BUILTIN_SHAPES {
            registry.insert(IconShape::new(*name, *size, vec![path.to_string()]));
        }
        registry
    }

    /// Create a registry with no shapes.
    pub fn empty() -> Self {
        Self {
            shapes: BTreeMap::new(),
        }
    }

    /// Add or replace a shape.
    pub fn insert(&mut self, shape: IconShape) {
        self.shapes.insert((shape.size, shape.name.clone()), shape);
    }

    /// Look up a shape by size and name.
    pub fn get(&self, size: SizeClass, name: &str) -> Option<&IconShape> {
        self.shapes.get(&(size, name.to_string()))
    }

    pub fn contains(&self, size: SizeClass, name: &str) -> bool {
        self.get(size, name).is_some()
    }

    /// All shapes ordered by size, then name.
    pub fn iter(&self) -> impl Iterator<Item = &IconShape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Render a registered icon.
    pub fn render(
        &self,
        size: SizeClass,
        name: &str,
        options: &IconOptions,
    ) -> Result<String, IconError> {
        let shape = self.get(size, name).ok_or_else(|| IconError::NotFound {
            size,
            name: name.to_string(),
        })?;
        Ok(render_icon(shape, options))
    }

    /// Scan a directory of SVG files and add every shape found.
    ///
    /// Files must live in a `sm/` or `lg/` subdirectory. Files without any
    /// `<path d="...">` are skipped. Returns the number of shapes added.
    pub fn scan(&mut self, icons_dir: &Path) -> Result<usize, IconError> {
        if !icons_dir.exists() {
            return Err(IconError::DirectoryNotFound(
                icons_dir.display().to_string(),
            ));
        }

        let mut count = 0;

        for entry in WalkDir::new(icons_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("svg") {
                continue;
            }

            let Some(size) = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .and_then(|n| n.parse::<SizeClass>().ok())
            else {
                tracing::debug!("Skipping icon outside a size directory: {}", path.display());
                continue;
            };

            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let source = fs::read_to_string(path).map_err(|e| IconError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            match parse_svg(name, size, &source) {
                Some(shape) => {
                    self.insert(shape);
                    count += 1;
                }
                None => tracing::warn!("No path data in {}", path.display()),
            }
        }

        Ok(count)
    }
}

/// Extract the view box and path data from SVG source.
pub fn parse_svg(name: &str, size: SizeClass, source: &str) -> Option<IconShape> {
    static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<path\b[^>]*?\sd="([^"]*)""#).expect("Invalid path regex")
    });
    static VIEW_BOX_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"<svg\b[^>]*?\sviewBox="([^"]*)""#).expect("Invalid viewBox regex")
    });

    let paths: Vec<String> = PATH_RE
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if paths.is_empty() {
        return None;
    }

    let mut shape = IconShape::new(name, size, paths);
    if let Some(view_box) = VIEW_BOX_RE.captures(source).and_then(|c| c.get(1)) {
        shape.view_box = view_box.as_str().to_string();
    }

    Some(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn includes_builtin_shapes() {
        let registry = IconRegistry::new();

        assert!(registry.contains(SizeClass::Lg, "paid"));
        assert!(registry.contains(SizeClass::Lg, "data"));
        assert!(!registry.contains(SizeClass::Sm, "paid"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn renders_registered_icon() {
        let registry = IconRegistry::new();

        let svg = registry
            .render(SizeClass::Lg, "data", &IconOptions::new())
            .unwrap();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\""));
        assert!(svg.contains("<path d=\"M13 7.1v-5a10"));
    }

    #[test]
    fn errors_on_unknown_icon() {
        let registry = IconRegistry::new();

        let result = registry.render(SizeClass::Sm, "paid", &IconOptions::new());

        assert!(matches!(
            result,
            Err(IconError::NotFound { size: SizeClass::Sm, name }) if name == "paid"
        ));
    }

    #[test]
    fn parses_svg_source() {
        let source = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 18 18"><path fill="red" d="M1 1h2"/><path d="M3 3h4"/></svg>"#;

        let shape = parse_svg("two", SizeClass::Sm, source).unwrap();

        assert_eq!(shape.view_box, "0 0 18 18");
        assert_eq!(shape.paths, vec!["M1 1h2".to_string(), "M3 3h4".to_string()]);
        assert!(parse_svg("none", SizeClass::Sm, "<svg></svg>").is_none());
    }

    #[test]
    fn scans_icons_directory() {
        let temp = tempdir().unwrap();
        let sm = temp.path().join("sm");
        let loose = temp.path().join("misc");
        fs::create_dir_all(&sm).unwrap();
        fs::create_dir_all(&loose).unwrap();

        fs::write(sm.join("star.svg"), r#"<svg><path d="M0 0h16"/></svg>"#).unwrap();
        fs::write(sm.join("empty.svg"), "<svg></svg>").unwrap();
        fs::write(sm.join("notes.txt"), "not an icon").unwrap();
        fs::write(loose.join("stray.svg"), r#"<svg><path d="M0 0"/></svg>"#).unwrap();

        let mut registry = IconRegistry::new();
        let count = registry.scan(temp.path()).unwrap();

        assert_eq!(count, 1);
        let star = registry.get(SizeClass::Sm, "star").unwrap();
        assert_eq!(star.view_box, "0 0 16 16");
        assert!(!registry.contains(SizeClass::Sm, "stray"));
    }

    #[test]
    fn scan_errors_on_missing_directory() {
        let mut registry = IconRegistry::empty();

        let result = registry.scan(Path::new("/definitely/not/here"));

        assert!(matches!(result, Err(IconError::DirectoryNotFound(_))));
    }
}
