//! `[build]` section configuration.
//!
//! Paths for content data and generated output, plus sitemap settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in barista.toml.
///
/// # Example
/// ```toml
/// [build]
/// data = "src/data"
/// output = "."
/// images = "assets/images"
/// minify = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the four content documents (site, locations,
    /// events, announcements), each as `<name>.json`.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Directory the generated pages and sitemap are written to.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Images directory (relative to the runtime base path). Every image
    /// identifier resolves to `<images>/<name>.webp` and `<name>.jpg`.
    #[serde(default = "defaults::build::images")]
    #[educe(Default = defaults::build::images())]
    pub images: PathBuf,

    /// Minify generated html/xml output.
    #[serde(default)]
    pub minify: bool,

    /// Sitemap generation settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    /// Generate sitemap.xml after location pages.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Sitemap file name, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.build.data, PathBuf::from("src/data"));
        assert_eq!(config.build.output, PathBuf::from("."));
        assert_eq!(config.build.images, PathBuf::from("assets/images"));
        assert!(!config.build.minify);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = SiteConfig::from_str(
            r#"
            [build]
            data = "content"
            output = "public"
            minify = true

            [build.sitemap]
            enable = false
            path = "urls.xml"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.data, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("urls.xml"));
    }
}
