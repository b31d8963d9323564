//! Build-time generation: per-location detail pages and the sitemap.

pub mod pages;
pub mod sitemap;
