//! `[base]` section configuration.
//!
//! Site identity: brand name, canonical origin, and runtime base path.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in barista.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// brand = "Cafe Latte Co."
/// url = "https://diamondgeezer.github.io/cafelatteco"
/// base_path = "./"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Brand name used in titles and generated page metadata.
    #[serde(default = "defaults::base::brand")]
    #[educe(Default = defaults::base::brand())]
    pub brand: String,

    /// Canonical site origin for absolute links in the sitemap.
    /// Required when `[build.sitemap].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Relative prefix the generated pages use to reach site assets.
    /// Per-location pages live one level below the root.
    #[serde(default = "defaults::base::base_path")]
    #[educe(Default = defaults::base::base_path())]
    pub base_path: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_defaults() {
        let config = SiteConfig::from_str("[base]\nbrand = \"Test\"").unwrap();

        assert_eq!(config.base.brand, "Test");
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.base_path, "./");
    }

    #[test]
    fn test_base_config_empty_section() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.base.brand, "Cafe Latte Co.");
    }

    #[test]
    fn test_base_config_unicode_brand() {
        let config = SiteConfig::from_str("[base]\nbrand = \"Café Léa ☕\"").unwrap();
        assert_eq!(config.base.brand, "Café Léa ☕");
    }
}
