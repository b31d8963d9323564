//! Per-location detail page generation.
//!
//! Each location gets one standalone HTML document: page metadata and
//! social preview tags, a stylesheet reference, a script bootstrap, and
//! a body shell whose mount points the runtime projector fills in. The
//! body is pre-tagged with the location's slug so the projector resolves
//! it without URL parsing.

use crate::{
    config::SiteConfig,
    content::{Location, Site},
    log,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

/// Relative prefix from a generated page (one level below the site root)
/// back to site assets.
const PAGE_BASE: &str = "../";

/// Synthesize the standalone HTML document for one location.
pub fn location_document(site: &Site, location: &Location) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} | {brand}</title>
  <meta name="description" content="Details, hours, and ordering for {name} at {brand}.">
  <meta property="og:title" content="{name} | {brand}">
  <meta property="og:description" content="Coffee, tacos, and community in {address}.">
  <meta property="og:image" content="{base}assets/images/{hero}.jpg">
  <link rel="stylesheet" href="{base}assets/css/styles.css">
  <script>window.__BASE_PATH__ = "{base}";</script>
  <script src="{base}assets/js/main.js" defer></script>
</head>
<body data-page="location-detail" data-location-slug="{slug}">
  <header data-nav></header>
  <main class="page">
    <div data-location-detail></div>
  </main>
  <div data-footer></div>
</body>
</html>"#,
        name = location.name,
        brand = site.brand_name,
        address = location.address_lines.join(", "),
        hero = location.hero_image,
        slug = location.slug,
        base = PAGE_BASE,
    )
}

/// Write one detail page per location under `<output>/locations/`.
///
/// Creates the destination directory if absent; write failures are fatal
/// and propagate to the build entry point.
pub fn write_location_pages(
    config: &SiteConfig,
    site: &Site,
    locations: &[Location],
) -> Result<usize> {
    let out_dir = config.output_dir().join("locations");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for location in locations {
        let path = out_dir.join(format!("{}.html", location.slug));
        let html = location_document(site, location);
        let html = minify(MinifyType::Html(html.as_bytes()), config);

        fs::write(&path, &*html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log!("pages"; "locations/{}.html", location.slug);
    }

    Ok(locations.len())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    #[test]
    fn test_document_metadata() {
        let site = fixtures::site();
        let locations = fixtures::locations();
        let html = location_document(&site, &locations[0]);

        assert!(html.contains("<title>Downtown | Cafe Latte Co.</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Details, hours, and ordering for Downtown at Cafe Latte Co.">"#
        ));
        assert!(html.contains(
            r#"<meta property="og:image" content="../assets/images/loc-downtown.jpg">"#
        ));
        assert!(html.contains("Coffee, tacos, and community in 600 Congress Ave, Austin, TX 78701."));
    }

    #[test]
    fn test_document_body_shell() {
        let site = fixtures::site();
        let locations = fixtures::locations();
        let html = location_document(&site, &locations[1]);

        assert!(html.contains(r#"<body data-page="location-detail" data-location-slug="mueller">"#));
        assert!(html.contains("<header data-nav></header>"));
        assert!(html.contains("<div data-location-detail></div>"));
        assert!(html.contains("<div data-footer></div>"));
        assert!(html.contains(r#"window.__BASE_PATH__ = "../";"#));
    }

    #[test]
    fn test_write_one_file_per_location() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        let count =
            write_location_pages(&config, &fixtures::site(), &fixtures::locations()).unwrap();
        assert_eq!(count, 3);

        for slug in ["downtown", "mueller", "south-congress"] {
            let path = dir.path().join("locations").join(format!("{slug}.html"));
            assert!(path.exists(), "missing {slug}.html");
        }
    }

    #[test]
    fn test_write_tolerates_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("locations")).unwrap();

        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        let locations = fixtures::locations();
        assert!(write_location_pages(&config, &fixtures::site(), &locations[..2]).is_ok());
    }
}
