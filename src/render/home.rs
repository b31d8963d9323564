//! Home page fragments: hero, locations preview, announcements, photo grid.
//!
//! The photo grid also serves the About page.

use super::{RenderEnv, locations::location_card, picture::render_picture};
use crate::content::{Announcement, Location, Site};

/// Locations shown on the home preview before the "see all" link.
const PREVIEW_COUNT: usize = 3;

/// Most images the photo grid will show.
const PHOTO_GRID_CAP: usize = 12;

/// Render the home hero. Purely a function of the site config.
pub fn render_hero(site: &Site, env: &RenderEnv) -> String {
    let hero_img = render_picture(env, "hero-coffee", "Latte art in a ceramic cup");
    format!(
        r#"
    <div class="hero">
      <div class="hero__inner">
        <div>
          <div class="badge">Austin born</div>
          <h1 class="hero__headline">{headline}</h1>
          <p class="hero__subhead">{subhead}</p>
          <div class="btn-row">
            <a class="btn primary" href="{base}{primary_href}">{primary_label}</a>
            <a class="btn" href="{base}{secondary_href}">{secondary_label}</a>
          </div>
        </div>
        <div class="hero__media" aria-hidden="true">
          {hero_img}
        </div>
      </div>
    </div>
  "#,
        headline = site.hero_headline,
        subhead = site.hero_subhead,
        base = env.base,
        primary_href = site.primary_cta_href,
        primary_label = site.primary_cta_label,
        secondary_href = site.secondary_cta_href,
        secondary_label = site.secondary_cta_label,
    )
}

/// Render the first 3 locations as cards plus a link to the full listing.
/// Input order is preserved, no sorting.
pub fn render_locations_preview(locations: &[Location], env: &RenderEnv) -> String {
    let cards: String = locations
        .iter()
        .take(PREVIEW_COUNT)
        .map(|location| location_card(location, env))
        .collect();

    format!(
        r#"
    <div class="section">
      <div class="container">
        <div class="split">
          <div>
            <div class="eyebrow">Locations</div>
            <h2>Find your spot</h2>
            <p>Three (and counting) Austin cafés pouring seasonal espresso, cold brew, and tacos made to order.</p>
            <a class="btn" href="{base}locations/">See all locations</a>
          </div>
          <div class="grid cards-3">
            {cards}
          </div>
        </div>
      </div>
    </div>
  "#,
        base = env.base,
    )
}

/// Render every announcement as a card, input order preserved.
pub fn render_announcements(announcements: &[Announcement], env: &RenderEnv) -> String {
    let cards: String = announcements
        .iter()
        .map(|item| {
            format!(
                r#"
              <div class="announcement card">
                <div>{img}</div>
                <div>
                  <div class="eyebrow">Happening now</div>
                  <h3>{headline}</h3>
                  <p>{body}</p>
                  <a class="btn" href="{base}{cta_href}">{cta_label}</a>
                </div>
              </div>
            "#,
                img = render_picture(env, &item.image, &item.headline),
                headline = item.headline,
                body = item.body,
                base = env.base,
                cta_href = item.cta_href,
                cta_label = item.cta_label,
            )
        })
        .collect();

    format!(
        r#"
    <div class="section">
      <div class="container grid cards-2">
        {cards}
      </div>
    </div>
  "#
    )
}

/// Gallery images across all locations, deduplicated in first-seen order
/// and capped at 12.
pub fn gather_gallery(locations: &[Location]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    locations
        .iter()
        .flat_map(|location| location.gallery_images.iter())
        .filter(|img| seen.insert(img.as_str()))
        .map(String::as_str)
        .take(PHOTO_GRID_CAP)
        .collect()
}

/// Render the deduplicated photo grid.
pub fn render_photo_grid(locations: &[Location], env: &RenderEnv) -> String {
    let images: String = gather_gallery(locations)
        .into_iter()
        .map(|img| render_picture(env, img, "Cafe Latte Co."))
        .collect();

    format!(
        r#"
    <div class="section">
      <div class="container">
        <div class="eyebrow">Scenes</div>
        <h2>Daily polaroids</h2>
        <div class="photo-grid">
          {images}
        </div>
      </div>
    </div>
  "#
    )
}

// ============================================================================
// Tests
// ============================================================================
