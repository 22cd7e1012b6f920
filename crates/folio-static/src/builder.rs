//! Static site builder.
//!
//! Turns a directory of YAML page sources into a browsable catalog: one HTML
//! page per source, the screenshots those pages reference, the default theme,
//! an icon gallery, a search index and a sitemap.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use folio_icons::{render_icon, IconOptions, IconRegistry};
use folio_page::{build_page, parse_page_source, PageSource};

use crate::assets::{stays_inside, AssetPipeline, DirAssetResolver};
use crate::templates::{Context, IconTile, NavItem, TemplateEngine};

/// Navigation position of pages that don't declare an `order`.
const DEFAULT_ORDER: i32 = 999;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory of YAML page sources
    pub pages_dir: PathBuf,

    /// Directory that logical asset paths resolve against
    pub assets_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Extra icon shapes laid out as `<size>/<name>.svg`
    pub icons_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// URL prefix every generated link starts with
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Extra stylesheets copied into the site and linked from every page
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("dist"),
            icons_dir: None,
            minify: true,
            base_url: "/".to_string(),
            title: "Documentation".to_string(),
            styles: Vec::new(),
        }
    }
}

/// Summary of a finished build.
#[derive(Debug)]
pub struct BuildResult {
    pub pages: usize,

    /// Component sections across all pages
    pub components: usize,

    /// Screenshots across all pages
    pub screenshots: usize,

    /// Icons listed in the icon gallery
    pub icons: usize,

    pub duration_ms: u64,
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read pages: {0}")]
    ReadError(String),

    #[error("Failed to parse page: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to resolve page assets: {path}: {message}")]
    AssetError { path: String, message: String },

    #[error("Pages {} and {} both render to {}", .first.display(), .second.display(), .output.display())]
    DuplicateRoute {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to render {page}: {source}")]
    TemplateError {
        page: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize search index: {0}")]
    SearchIndex(#[from] serde_json::Error),
}

/// A discovered page source and where it renders to.
#[derive(Debug)]
struct PageInfo {
    source_path: PathBuf,

    /// Path relative to the pages directory
    relative_path: PathBuf,

    output_path: PathBuf,
    url: String,
    page: PageSource,
}

/// One record of `search-index.json`.
#[derive(Debug, Serialize)]
struct SearchEntry<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    components: Vec<&'a str>,
    content: String,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    resolver: DirAssetResolver,
    icons: IconRegistry,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a builder. A configured icons directory is scanned up front; a
    /// scan failure leaves only the built-in icons.
    pub fn new(config: BuildConfig) -> Self {
        let mut icons = IconRegistry::new();

        if let Some(dir) = &config.icons_dir {
            match icons.scan(dir) {
                Ok(count) => tracing::info!("Loaded {} icons from {}", count, dir.display()),
                Err(e) => tracing::warn!("Failed to scan icons directory: {}", e),
            }
        }

        Self {
            resolver: DirAssetResolver::new(&config.assets_dir, config.base_url.clone()),
            templates: TemplateEngine::new(),
            icons,
            config,
        }
    }

    /// Build the site into the output directory.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let started = Instant::now();
        let out = &self.config.output_dir;

        fs::create_dir_all(out).map_err(write_error(out))?;

        let pages = self.discover_pages()?;
        tracing::debug!("Discovered {} pages", pages.len());

        let nav = self.build_navigation(&pages);

        let counts = pages
            .par_iter()
            .map(|page| self.render_page(page, &nav))
            .collect::<Result<Vec<_>, _>>()?;
        let (components, screenshots) = counts
            .iter()
            .fold((0, 0), |(c, s), (pc, ps)| (c + pc, s + ps));

        self.copy_images(&pages)?;
        self.write_theme()?;
        let icons = self.write_icon_gallery(&nav)?;
        self.write_search_index(&pages)?;
        self.write_sitemap(&pages)?;

        Ok(BuildResult {
            pages: pages.len(),
            components,
            screenshots,
            icons,
            duration_ms: started.elapsed().as_millis() as u64,
            output_dir: out.clone(),
        })
    }

    /// Parse every `*.yaml`/`*.yml` file under the pages directory.
    ///
    /// Pages are ordered by `order`, ties keeping file-name order. A slug
    /// that leaves the output directory, or two pages rendering to the same
    /// file, fail the build.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let root = &self.config.pages_dir;
        if !root.is_dir() {
            return Err(BuildError::ReadError(format!(
                "Pages directory not found: {}",
                root.display()
            )));
        }

        let mut pages = Vec::new();
        let mut routes: HashMap<PathBuf, PathBuf> = HashMap::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if !matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml" | "yml")
            ) {
                continue;
            }

            let source = fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;
            let page = parse_page_source(&source).map_err(|e| BuildError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            let route = route_for(&relative_path, page.slug.as_deref()).ok_or_else(|| {
                BuildError::ParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "slug {:?} leaves the output directory",
                        page.slug.as_deref().unwrap_or_default()
                    ),
                }
            })?;
            let output_path = self.config.output_dir.join(&route).join("index.html");

            if let Some(first) = routes.insert(output_path.clone(), path.to_path_buf()) {
                return Err(BuildError::DuplicateRoute {
                    output: output_path,
                    first,
                    second: path.to_path_buf(),
                });
            }

            pages.push(PageInfo {
                source_path: path.to_path_buf(),
                url: self.url_for(&route),
                output_path,
                relative_path,
                page,
            });
        }

        pages.sort_by_key(|p| p.page.order.unwrap_or(DEFAULT_ORDER));

        Ok(pages)
    }

    fn url_for(&self, route: &Path) -> String {
        let segments: Vec<_> = route
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect();

        if segments.is_empty() {
            self.config.base_url.clone()
        } else {
            format!("{}{}/", self.config.base_url, segments.join("/"))
        }
    }

    /// Site navigation: top-level pages first, then one section per
    /// subdirectory, then the icon gallery.
    fn build_navigation(&self, pages: &[PageInfo]) -> Vec<NavItem> {
        let mut groups: BTreeMap<PathBuf, Vec<NavItem>> = BTreeMap::new();

        for page in pages.iter().filter(|p| p.page.nav) {
            let dir = page
                .relative_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            groups
                .entry(dir)
                .or_default()
                .push(NavItem::link(&page.page.title, &page.url));
        }

        let mut nav = groups.remove(Path::new("")).unwrap_or_default();

        nav.extend(groups.into_iter().map(|(dir, children)| {
            let label = dir
                .file_name()
                .and_then(|s| s.to_str())
                .map(capitalize)
                .unwrap_or_else(|| "Section".to_string());
            NavItem {
                children,
                ..NavItem::link(&label, &self.url_for(&dir))
            }
        }));

        if !self.icons.is_empty() {
            nav.push(NavItem::link("Icons", &self.url_for(Path::new("icons"))));
        }

        nav
    }

    fn context(&self, title: &str, nav: &[NavItem]) -> Context {
        Context {
            title: title.to_string(),
            site_title: self.config.title.clone(),
            nodes: Vec::new(),
            nav: nav.to_vec(),
            base_url: self.config.base_url.clone(),
            styles: self
                .extra_styles()
                .map(|name| format!("{}assets/{}", self.config.base_url, name))
                .collect(),
        }
    }

    /// Resolve, build and render one page. Returns its component and
    /// screenshot counts.
    fn render_page(&self, info: &PageInfo, nav: &[NavItem]) -> Result<(usize, usize), BuildError> {
        let descriptor = info
            .page
            .resolve(&self.resolver)
            .map_err(|e| BuildError::AssetError {
                path: info.source_path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut context = self.context(&descriptor.title, nav);
        mark_active(&mut context.nav, &info.url);
        context.nodes = build_page(&descriptor).nodes;

        let html = self
            .templates
            .render_page(&context)
            .map_err(|source| BuildError::TemplateError {
                page: info.relative_path.display().to_string(),
                source,
            })?;
        write_file(&info.output_path, html)?;

        tracing::debug!(
            "{} -> {}",
            info.relative_path.display(),
            info.output_path.display()
        );

        Ok((descriptor.components.len(), descriptor.screenshot_count()))
    }

    /// Copy each referenced screenshot once, keeping its logical path under
    /// `assets/`.
    fn copy_images(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let images: BTreeSet<&str> = pages.iter().flat_map(|p| p.page.image_paths()).collect();
        let target_root = self.config.output_dir.join("assets");

        for image in &images {
            let source = self
                .resolver
                .locate(image)
                .map_err(|e| BuildError::AssetError {
                    path: image.to_string(),
                    message: e.to_string(),
                })?;
            let target = target_root.join(image);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(write_error(parent))?;
            }
            fs::copy(&source, &target).map_err(write_error(&target))?;
        }

        tracing::debug!("Copied {} images", images.len());
        Ok(())
    }

    /// File names of the configured stylesheets as they appear in `assets/`.
    fn extra_styles(&self) -> impl Iterator<Item = &str> {
        self.config
            .styles
            .iter()
            .map(|s| Path::new(s).file_name().and_then(|f| f.to_str()).unwrap_or("style.css"))
    }

    /// Write the default theme and copy the configured stylesheets.
    fn write_theme(&self) -> Result<(), BuildError> {
        let dir = self.config.output_dir.join("assets");

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("{}", e);
                css
            })
        } else {
            css
        };
        write_file(&dir.join("main.css"), css)?;
        write_file(&dir.join("main.js"), AssetPipeline::generate_js())?;

        for (style, name) in self.config.styles.iter().zip(self.extra_styles()) {
            let source = Path::new(style);
            if !source.is_file() {
                tracing::warn!("Stylesheet not found: {}", style);
                continue;
            }
            let target = dir.join(name);
            fs::copy(source, &target).map_err(write_error(&target))?;
            tracing::info!("Copied stylesheet {}", style);
        }

        Ok(())
    }

    /// Write `icons/index.html`. Returns the number of icons listed.
    fn write_icon_gallery(&self, nav: &[NavItem]) -> Result<usize, BuildError> {
        if self.icons.is_empty() {
            return Ok(0);
        }

        let tiles: Vec<IconTile> = self
            .icons
            .iter()
            .map(|shape| IconTile {
                name: shape.name.clone(),
                size: shape.size.to_string(),
                svg: render_icon(
                    shape,
                    &IconOptions::new().class_name("icon").title(shape.name.clone()),
                ),
            })
            .collect();

        let html = self
            .templates
            .render_icons(&self.context("Icons", nav), &tiles)
            .map_err(|source| BuildError::TemplateError {
                page: "icons".to_string(),
                source,
            })?;
        write_file(&self.config.output_dir.join("icons/index.html"), html)?;

        Ok(tiles.len())
    }

    fn write_search_index(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let entries: Vec<SearchEntry> = pages
            .iter()
            .map(|info| {
                let page = &info.page;
                SearchEntry {
                    title: &page.title,
                    description: page.description.as_deref().unwrap_or_default(),
                    url: &info.url,
                    components: page.components.iter().map(|c| c.title.as_str()).collect(),
                    content: page
                        .components
                        .iter()
                        .map(|c| c.blurb.as_str())
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            })
            .collect();

        write_file(
            &self.config.output_dir.join("search-index.json"),
            serde_json::to_string_pretty(&entries)?,
        )
    }

    fn write_sitemap(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let mut sitemap = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for info in pages {
            sitemap.push_str(&format!(
                "  <url><loc>{}</loc></url>\n",
                escape_xml(&info.url)
            ));
        }
        sitemap.push_str("</urlset>\n");

        let out = &self.config.output_dir;
        write_file(&out.join("sitemap.xml"), sitemap)?;
        write_file(
            &out.join("robots.txt"),
            format!(
                "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml\n",
                self.config.base_url
            ),
        )
    }
}

/// Output route of a page relative to the output directory.
///
/// `button.yaml` renders to `button/`, `native/index.yaml` to `native/`,
/// and a `slug` replaces the derived route. `None` when the slug would
/// leave the output directory.
fn route_for(relative: &Path, slug: Option<&str>) -> Option<PathBuf> {
    if let Some(slug) = slug {
        let route = PathBuf::from(slug.trim_matches('/'));
        return stays_inside(&route).then_some(route);
    }

    let dir = relative.parent().unwrap_or(Path::new(""));
    Some(match relative.file_stem().and_then(|s| s.to_str()) {
        Some("index") | None => dir.to_path_buf(),
        Some(stem) => dir.join(stem),
    })
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn mark_active(items: &mut [NavItem], url: &str) {
    for item in items {
        item.active = item.path == url;
        mark_active(&mut item.children, url);
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> BuildError + '_ {
    move |source| BuildError::WriteError {
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }
    fs::write(path, contents).map_err(write_error(path))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
