//! Print a single icon.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_icons::{IconOptions, IconRegistry, SizeClass};

use crate::config::load_config;

/// Render the named icon to an SVG string.
pub fn run(
    config_path: &Path,
    name: &str,
    size: &str,
    class: Option<String>,
    title: Option<String>,
    attrs: &[String],
) -> Result<String> {
    let size: SizeClass = size.parse()?;

    let mut registry = IconRegistry::new();
    if let Some(dir) = load_config(config_path)?.icons.dir {
        let count = registry.scan(&PathBuf::from(&dir))?;
        tracing::debug!("Loaded {} icons from {}", count, dir);
    }

    let mut options = IconOptions::new();
    if let Some(class) = class {
        options = options.class_name(class);
    }
    if let Some(title) = title {
        options = options.title(title);
    }
    for attr in attrs {
        let (key, value) = attr
            .split_once('=')
            .with_context(|| format!("Attribute must be NAME=VALUE: {}", attr))?;
        options = options.attribute(key, value)?;
    }

    Ok(registry.render(size, name, &options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_config() -> PathBuf {
        PathBuf::from("definitely-missing-folio.toml")
    }

    #[test]
    fn renders_builtin_icon() {
        let svg = run(
            &no_config(),
            "paid",
            "lg",
            Some("icon".to_string()),
            None,
            &["data-testid=paid".to_string()],
        )
        .unwrap();

        assert!(svg.contains(r#"class="icon" data-testid="paid""#));
        assert!(svg.contains("<path d=\"M12 2a10"));
    }

    #[test]
    fn errors_on_unknown_icon_or_size() {
        assert!(run(&no_config(), "nope", "lg", None, None, &[]).is_err());
        assert!(run(&no_config(), "paid", "xl", None, None, &[]).is_err());
    }

    #[test]
    fn errors_on_malformed_attribute() {
        let result = run(&no_config(), "paid", "lg", None, None, &["novalue".to_string()]);

        assert!(result.is_err());
    }
}
