//! Build orchestration.
//!
//! Runs the Static Page Generator to completion, synchronously: read the
//! `site` and `locations` documents from the filesystem, write one detail
//! page per location, then emit the sitemap. File write failures are
//! fatal here by design; this runs in a controlled build step, not in
//! front of end users.

use crate::{
    config::SiteConfig,
    content::{ContentStore, FsSource},
    generator::{pages::write_location_pages, sitemap::build_sitemap},
    log,
};
use anyhow::{Context, Result};
use std::fs;

/// Build the site: per-location pages plus the sitemap.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let store = ContentStore::new(FsSource::new(config.data_dir()));

    let site = store
        .site()
        .context("Failed to load site config document")?;
    let locations = store
        .locations()
        .context("Failed to load locations document")?;

    let output = config.output_dir();
    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let count = write_location_pages(config, site, locations)?;
    log!("build"; "generated {count} location pages");

    build_sitemap(config, locations)?;

    log!("build"; "done");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
