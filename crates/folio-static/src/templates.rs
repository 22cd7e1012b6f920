//! Template engine: the HTML rendering host for page trees.

use folio_page::Node;
use minijinja::{context, Environment};

/// A navigation item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Child items
    pub children: Vec<NavItem>,
    /// Whether this is the active page
    pub active: bool,
}

impl NavItem {
    /// A leaf item pointing at `path`.
    pub fn link(title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            path: path.to_string(),
            children: Vec::new(),
            active: false,
        }
    }
}

/// Context for rendering a catalog page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Page tree nodes, in render order
    pub nodes: Vec<Node>,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Base URL
    pub base_url: String,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

/// One icon in the icon gallery.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IconTile {
    pub name: String,
    pub size: String,
    pub svg: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        env.add_template_owned("icons.html".to_string(), ICONS_TEMPLATE.to_string())
            .expect("Failed to add icons template");

        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");

        Self { env }
    }

    /// Render a catalog page.
    pub fn render_page(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            nodes => &context.nodes,
            nav => &context.nav,
            base_url => &context.base_url,
            styles => &context.styles,
        })
    }

    /// Render the icon gallery. `context.nodes` is ignored.
    pub fn render_icons(
        &self,
        context: &Context,
        icons: &[IconTile],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("icons.html")?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            nav => &context.nav,
            base_url => &context.base_url,
            styles => &context.styles,
            icons => icons,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <button class="menu-btn" type="button" aria-label="Toggle navigation">&#9776;</button>
  <div class="layout">
    <nav class="sidebar">
      {% include "nav.html" %}
    </nav>
    <main class="main">
      {% block content %}{% endblock %}
    </main>
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
{% for node in nodes %}
{% if node.kind == "menu" %}
  <nav class="page-menu">
    <ul>
    {% for entry in node.entries %}
      <li><a href="#{{ entry.anchor }}">{{ entry.title }}</a></li>
    {% endfor %}
    </ul>
  </nav>
{% elif node.kind == "title" %}
  <h1 class="page-title">{{ node.text }}</h1>
{% elif node.kind == "paragraph" %}
  <p class="blurb">{{ node.text }}</p>
{% elif node.kind == "markup" %}
  <div class="blurb">{{ node.html | safe }}</div>
{% elif node.kind == "section" %}
  <section class="component" id="{{ node.anchor }}">
    <h2>{{ node.title }}</h2>
    <p>{{ node.blurb }}</p>
    {% if node.gallery %}
    <div class="gallery">
    {% for entry in node.gallery %}
      <figure class="screenshot">
        <figcaption>
          <span class="screenshot-title">{{ entry.title }}</span>
          {% if entry.caption %}<span class="screenshot-caption">{{ entry.caption }}</span>{% endif %}
        </figcaption>
        <img src="{{ entry.src }}" alt="{{ entry.alt }}" width="{{ entry.width }}" height="{{ entry.height }}" loading="lazy">
      </figure>
    {% endfor %}
    </div>
    {% endif %}
  </section>
{% elif node.kind == "readme" %}
  <div class="readme content">
    {{ node.html | safe }}
  </div>
{% endif %}
{% endfor %}
</article>
{% endblock %}"##;

const ICONS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  <h1 class="page-title">{{ title }}</h1>
  <ul class="icon-grid">
  {% for icon in icons %}
    <li class="icon-tile icon-{{ icon.size }}">
      {{ icon.svg | safe }}
      <span class="icon-name">{{ icon.name }}</span>
      <span class="icon-size">{{ icon.size }}</span>
    </li>
  {% endfor %}
  </ul>
</article>
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"<div class="nav-header">
  <a href="{{ base_url }}" class="nav-logo">{{ site_title }}</a>
</div>
<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item{% if item.active %} active{% endif %}">
    <a href="{{ item.path }}">{{ item.title }}</a>
    {% if item.children %}
    <ul class="nav-children">
      {% for child in item.children %}
      <li class="nav-item{% if child.active %} active{% endif %}">
        <a href="{{ child.path }}">{{ child.title }}</a>
      </li>
      {% endfor %}
    </ul>
    {% endif %}
  </li>
{% endfor %}
</ul>"##;
