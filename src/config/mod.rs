//! Site configuration management for `barista.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `[base]`  | Site identity (brand, origin url, base path)   |
//! | `[build]` | Content/output paths, minify, sitemap          |
//!
//! # Example
//!
//! ```toml
//! [base]
//! brand = "Cafe Latte Co."
//! url = "https://diamondgeezer.github.io/cafelatteco"
//!
//! [build]
//! data = "src/data"
//! output = "."
//! minify = true
//!
//! [build.sitemap]
//! enable = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

pub use base::BaseConfig;
pub use build::{BuildConfig, SitemapConfig};

use crate::cli::Cli;
use anyhow::{Result, bail};
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing barista.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root directory (set from CLI, not the config file)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Apply CLI argument overrides on top of the file configuration
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.root = cli.root.clone();

        if let Some(data) = &cli.data {
            self.build.data = data.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        if let Some(args) = cli.build_args() {
            if let Some(minify) = args.minify {
                self.build.minify = minify;
            }
            if let Some(sitemap) = args.sitemap {
                self.build.sitemap.enable = sitemap;
            }
            if let Some(base_url) = &args.base_url {
                self.base.url = Some(base_url.clone());
            }
        }
    }

    /// Validate configuration consistency.
    ///
    /// The sitemap needs an absolute origin to emit absolute URLs.
    pub fn validate(&self) -> Result<()> {
        if self.build.sitemap.enable && self.base.url.is_none() {
            bail!("`base.url` is required when `build.sitemap.enable = true`");
        }
        if let Some(url) = &self.base.url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!(ConfigError::Validation(format!(
                "`base.url` must be an absolute http(s) origin, got `{url}`"
            )));
        }
        Ok(())
    }

    /// Get the project root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Content data directory, rebased onto the project root.
    pub fn data_dir(&self) -> PathBuf {
        self.rebase(&self.build.data)
    }

    /// Output directory, rebased onto the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.rebase(&self.build.output)
    }

    /// Site origin with any trailing slash removed.
    ///
    /// Only call after `validate()` passed with sitemap enabled.
    pub fn site_url(&self) -> &str {
        self.base
            .url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or_default()
    }

    /// Expand `~` and rebase a configured path onto the project root.
    fn rebase(&self, path: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let expanded = PathBuf::from(expanded);
        if expanded.is_absolute() {
            expanded
        } else {
            self.get_root().join(expanded)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
