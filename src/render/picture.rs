//! Image projection.
//!
//! Every image identifier maps to two sibling assets sharing the same
//! base name: a modern-format `.webp` source and a `.jpg` fallback.

use super::RenderEnv;

/// The two physical paths an image identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub webp: String,
    pub fallback: String,
}

/// Resolve an image identifier to its webp/jpg asset pair.
pub fn image_source(env: &RenderEnv, name: &str) -> ImageSource {
    ImageSource {
        webp: format!("{}{}/{}.webp", env.base, env.images, name),
        fallback: format!("{}{}/{}.jpg", env.base, env.images, name),
    }
}

/// Render a dual-source `<picture>` element for an image identifier.
pub fn render_picture(env: &RenderEnv, name: &str, alt: &str) -> String {
    let src = image_source(env, name);
    format!(
        r#"
    <picture>
      <source srcset="{webp}" type="image/webp">
      <img src="{fallback}" alt="{alt}">
    </picture>
  "#,
        webp = src.webp,
        fallback = src.fallback,
    )
}
