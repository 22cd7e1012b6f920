//! Site assets: the default stylesheet and script, plus directory-backed
//! asset resolution for page sources.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use folio_page::{AssetError, AssetResolver, ReadmeContent};

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// Resolves page assets against a directory on disk.
///
/// Images resolve to `{base_url}assets/{path}`; the site builder copies them
/// to that location. Readmes are read and rendered from markdown.
#[derive(Debug, Clone)]
pub struct DirAssetResolver {
    root: PathBuf,
    base_url: String,
}

impl DirAssetResolver {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    /// Location of a logical path on disk, rejecting paths that escape the root.
    pub fn locate(&self, path: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(path);
        if !stays_inside(relative) {
            return Err(AssetError::NotFound(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

/// Whether joining `relative` onto a directory stays inside that directory.
pub(crate) fn stays_inside(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl AssetResolver for DirAssetResolver {
    fn resolve_image(&self, path: &str) -> Result<String, AssetError> {
        if !self.locate(path)?.is_file() {
            return Err(AssetError::NotFound(path.to_string()));
        }
        Ok(format!(
            "{}assets/{}",
            self.base_url,
            path.trim_start_matches("./")
        ))
    }

    fn resolve_readme(&self, path: &str) -> Result<ReadmeContent, AssetError> {
        let location = self.locate(path)?;
        let source = fs::read_to_string(&location).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path.to_string()),
            _ => AssetError::ReadError {
                path: location.display().to_string(),
                message: e.to_string(),
            },
        })?;
        Ok(ReadmeContent::from_markdown(&source))
    }
}

// Docs theme. Colors are custom properties so a configured stylesheet can
// override them.
const DEFAULT_CSS: &str = r#"/* Folio Docs Theme */

:root {
  --background: #ffffff;
  --foreground: #111236;
  --muted: #f1f2f8;
  --muted-foreground: #545860;
  --border: #dddde5;
  --primary: #0770e3;
  --primary-foreground: #ffffff;
  --card: #ffffff;
  --radius: 0.375rem;
  --sidebar-width: 280px;
  --content-max-width: 960px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans, system-ui, -apple-system, sans-serif);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: 100vh;
}

/* Sidebar */
.sidebar {
  background: var(--muted);
  border-right: 1px solid var(--border);
  padding: 1.5rem;
  position: sticky;
  top: 0;
  height: 100vh;
  overflow-y: auto;
}

.nav-header {
  margin-bottom: 1.5rem;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
  text-decoration: none;
}

.nav-list,
.nav-children {
  list-style: none;
}

.nav-children {
  margin-left: 1rem;
  margin-top: 0.25rem;
}

.nav-item {
  margin-bottom: 0.25rem;
}

.nav-item a {
  display: block;
  padding: 0.5rem 0.75rem;
  color: var(--muted-foreground);
  text-decoration: none;
  border-radius: var(--radius);
}

.nav-item.active > a {
  background: var(--primary);
  color: var(--primary-foreground);
}

/* Main content */
.main {
  padding: 2rem;
}

.doc {
  max-width: var(--content-max-width);
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.blurb {
  margin-bottom: 1rem;
}

/* In-page menu */
.page-menu ul {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem 1rem;
  margin-bottom: 1.5rem;
}

.page-menu a {
  color: var(--primary);
  text-decoration: none;
}

.page-menu a.current {
  font-weight: 600;
  text-decoration: underline;
}

/* Component sections */
.component {
  margin: 2.5rem 0;
}

.component h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 0.75rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--border);
}

.component p {
  margin-bottom: 1rem;
}

/* Screenshot gallery */
.gallery {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
  align-items: flex-start;
}

.screenshot {
  flex: 0 1 280px;
}

.screenshot figcaption {
  display: flex;
  flex-direction: column;
  margin-bottom: 0.5rem;
}

.screenshot-title {
  font-weight: 600;
}

.screenshot-caption {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.screenshot img {
  display: block;
  width: 100%;
  height: auto;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

/* Readme */
.readme {
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
}

.content h1,
.content h2,
.content h3 {
  margin: 1.5rem 0 0.75rem;
}

.content p,
.content ul,
.content table {
  margin-bottom: 1rem;
}

.content ul {
  padding-left: 1.5rem;
}

.content pre {
  background: var(--muted);
  border-radius: var(--radius);
  padding: 1rem;
  overflow-x: auto;
  font-family: var(--font-mono, ui-monospace, monospace);
  font-size: 0.875rem;
}

.content table {
  border-collapse: collapse;
}

.content th,
.content td {
  border: 1px solid var(--border);
  padding: 0.25rem 0.75rem;
}

/* Icon gallery */
.icon-grid {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
  gap: 1rem;
}

.icon-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  fill: var(--foreground);
}

.icon-size {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* Menu button for mobile */
.menu-btn {
  display: none;
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 100;
  padding: 0.5rem;
  background: var(--primary);
  color: var(--primary-foreground);
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
}

@media (max-width: 1024px) {
  .layout {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: fixed;
    left: -100%;
    z-index: 50;
    transition: left 0.3s;
    width: var(--sidebar-width);
  }

  .sidebar.open {
    left: 0;
  }

  .menu-btn {
    display: block;
  }
}
"#;

const DEFAULT_JS: &str = r#"// Folio catalog runtime
(() => {
  const sidebar = document.querySelector('.sidebar');
  document.querySelector('.menu-btn')?.addEventListener('click', () => {
    sidebar?.classList.toggle('open');
  });

  // Screenshots open at full resolution
  for (const img of document.querySelectorAll('.gallery img')) {
    img.style.cursor = 'zoom-in';
    img.addEventListener('click', () => window.open(img.currentSrc || img.src, '_blank'));
  }

  // Keep the in-page menu in sync with the section in view
  const links = new Map(
    [...document.querySelectorAll('.page-menu a')].map(a => [a.hash.slice(1), a])
  );
  if (links.size && 'IntersectionObserver' in window) {
    const observer = new IntersectionObserver(entries => {
      for (const entry of entries) {
        links.get(entry.target.id)?.classList.toggle('current', entry.isIntersecting);
      }
    }, { rootMargin: '0px 0px -60% 0px' });
    document.querySelectorAll('section.component').forEach(s => observer.observe(s));
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".gallery"));
        assert!(css.contains(".page-menu"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("addEventListener"));
    }

    #[test]
    fn minifies_default_css() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".gallery"));
    }

    #[test]
    fn resolves_existing_images() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("ios")).unwrap();
        fs::write(temp.path().join("ios/default.png"), b"png").unwrap();

        let resolver = DirAssetResolver::new(temp.path(), "/docs/");

        assert_eq!(
            resolver.resolve_image("ios/default.png").unwrap(),
            "/docs/assets/ios/default.png"
        );
        assert!(matches!(
            resolver.resolve_image("android/default.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn rejects_paths_outside_root() {
        let temp = tempdir().unwrap();
        let resolver = DirAssetResolver::new(temp.path().join("assets"), "/");

        assert!(resolver.resolve_image("../secret.png").is_err());
        assert!(resolver.resolve_readme("/etc/passwd").is_err());
    }

    #[test]
    fn renders_readme_from_disk() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("readme.md"), "# Star rating\n\nFive stars.").unwrap();

        let resolver = DirAssetResolver::new(temp.path(), "/");
        let readme = resolver.resolve_readme("readme.md").unwrap();

        assert!(readme.html().contains(r#"<h1 id="readme-star-rating">Star rating</h1>"#));
        assert!(matches!(
            resolver.resolve_readme("missing.md"),
            Err(AssetError::NotFound(_))
        ));
    }
}
