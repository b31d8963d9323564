//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing the fixed site routes plus every
//! generated per-location page, for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/locations/downtown.html</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    content::Location,
    log,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static routes every deployment of the site serves.
const FIXED_ROUTES: [&str; 8] = [
    "",
    "about/",
    "locations/",
    "events/",
    "order/",
    "contact/",
    "privacy/",
    "careers/",
];

// ============================================================================
// Public API
// ============================================================================

/// Build the sitemap if enabled in config.
pub fn build_sitemap(config: &SiteConfig, locations: &[Location]) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::from_content(config.site_url(), locations);
        sitemap.write(config)?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// Absolute URL of each route
    urls: Vec<String>,
}

impl Sitemap {
    /// Fixed routes plus one per-location detail route, each absolute
    /// under the site origin.
    fn from_content(site_url: &str, locations: &[Location]) -> Self {
        let urls = FIXED_ROUTES
            .iter()
            .map(|route| format!("{site_url}/{route}"))
            .chain(
                locations
                    .iter()
                    .map(|location| format!("{site_url}/locations/{}.html", location.slug)),
            )
            .collect();

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for url in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url)));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to the output directory.
    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.output_dir().join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        fs::write(&path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", config.build.sitemap.path.display());
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
