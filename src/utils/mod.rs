//! Utility modules for the content pipeline.

pub mod date;
pub mod minify;
