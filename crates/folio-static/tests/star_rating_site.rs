//! End-to-end build of a one-page catalog.

use std::fs;
use std::path::Path;

use folio_static::{BuildConfig, StaticBuilder};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const PAGE: &str = r#"
title: Star Ratings
description: Displaying a score within a range
blurb:
  - Star ratings are used for displaying a score within a given range.
readme: star-rating/readme.md
show_menu: false
components:
  - id: default
    title: Default
    blurb: By default, star ratings are shown in a static form.
    screenshots:
      - title: iOS
        width: 750
        height: 1334
        src: star-rating/screenshots/ios/default.png
        alt_text: iOS Default Star Rating Component
        sub_text: (iPhone 8 Simulator)
      - title: Android
        width: 1080
        height: 1920
        src: star-rating/screenshots/android/default.png
        alt_text: Android Default Star Rating Component
        sub_text: (Google Pixel Emulator)
"#;

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn builds_star_rating_catalog() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    write(&root.join("pages/star-rating.yaml"), PAGE.as_bytes());
    write(
        &root.join("assets/star-rating/readme.md"),
        b"# Star rating\n\nRenders between zero and five stars.",
    );
    write(
        &root.join("assets/star-rating/screenshots/ios/default.png"),
        b"ios-png",
    );
    write(
        &root.join("assets/star-rating/screenshots/android/default.png"),
        b"android-png",
    );

    let config = BuildConfig {
        pages_dir: root.join("pages"),
        assets_dir: root.join("assets"),
        output_dir: root.join("dist"),
        title: "Backpack".to_string(),
        minify: false,
        ..Default::default()
    };

    let result = StaticBuilder::new(config).build().unwrap();

    assert_eq!(result.pages, 1);
    assert_eq!(result.components, 1);
    assert_eq!(result.screenshots, 2);
    assert_eq!(result.icons, 2);

    let html = fs::read_to_string(root.join("dist/star-rating/index.html")).unwrap();

    assert!(html.contains("<title>Star Ratings - Backpack</title>"));
    assert!(!html.contains("page-menu"));
    assert!(html.contains("Star ratings are used for displaying a score within a given range."));
    assert!(html.contains(r#"<section class="component" id="default">"#));

    let ios = html.find("iOS Default Star Rating Component").unwrap();
    let android = html.find("Android Default Star Rating Component").unwrap();
    let readme = html.find(r#"<h1 id="readme-star-rating">Star rating</h1>"#).unwrap();
    assert!(ios < android);
    assert!(android < readme);
    assert!(html.contains("(Google Pixel Emulator)"));

    assert_eq!(
        fs::read(root.join("dist/assets/star-rating/screenshots/android/default.png")).unwrap(),
        b"android-png"
    );
    assert!(root.join("dist/assets/main.js").exists());

    let sitemap = fs::read_to_string(root.join("dist/sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>/star-rating/</loc>"));
}
