//! Location cards, the full listing, and the detail view.

use super::{HeadPatch, RenderEnv, picture::render_picture};
use crate::content::{Location, LocationLinks, LocationStatus, Site};

/// Default copy for locations without notes.
const DEFAULT_NOTES: &str = "Good coffee, tacos, and friendly faces all day.";

/// Status chip markup for a location.
fn status_chip(location: &Location) -> String {
    match location.status {
        LocationStatus::ComingSoon => {
            r#"<span class="status-chip coming">Coming soon</span>"#.to_string()
        }
        LocationStatus::Open => format!(
            r#"<span class="status-chip">Open · {}</span>"#,
            location.hours_short
        ),
    }
}

/// A plain link when the URL exists, nothing otherwise.
fn optional_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => {
            format!(r#"<a href="{href}" target="_blank" rel="noreferrer">{label}</a>"#)
        }
        None => String::new(),
    }
}

/// A button-styled link when the URL exists, nothing otherwise.
fn optional_button(label: &str, href: Option<&str>, primary: bool) -> String {
    let class = if primary { "btn primary" } else { "btn" };
    match href {
        Some(href) => {
            format!(r#"<a class="{class}" href="{href}" target="_blank" rel="noreferrer">{label}</a>"#)
        }
        None => String::new(),
    }
}

/// Render one location card. Never fails on absent optional fields;
/// missing notes and links simply leave their elements out.
pub fn location_card(location: &Location, env: &RenderEnv) -> String {
    let img = render_picture(
        env,
        &location.hero_image,
        &format!("{} interior", location.name),
    );
    let links = location.links.clone().unwrap_or_default();

    format!(
        r#"
    <article class="card location-card">
      <div class="card__img">{img}</div>
      <div class="location-card__meta">
        <div class="eyebrow">{address}</div>
        {chip}
      </div>
      <h3>{name}</h3>
      <p>{notes}</p>
      <div class="location-card__links">
        <a href="{base}locations/{slug}.html">Details</a>
        {menu}
        {order}
        {delivery}
        {directions}
      </div>
    </article>
  "#,
        address = location.address_lines.join(" · "),
        chip = status_chip(location),
        name = location.name,
        notes = location.notes.as_deref().unwrap_or(""),
        base = env.base,
        slug = location.slug,
        menu = optional_link("Menu", links.menu_url.as_deref()),
        order = optional_link("Order", links.order_url.as_deref()),
        delivery = optional_link("Delivery", links.delivery_url.as_deref()),
        directions = optional_link("Directions", links.directions_url.as_deref()),
    )
}

/// Render every location as a card, input order preserved.
pub fn render_listing(locations: &[Location], env: &RenderEnv) -> String {
    locations
        .iter()
        .map(|location| location_card(location, env))
        .collect()
}

/// Result of projecting the location-detail mount.
pub struct Detail {
    pub html: String,
    pub head: Option<HeadPatch>,
}

/// Resolve a slug against the locations set and render the detail view.
///
/// A miss is a recoverable case: render the not-found placeholder and
/// leave the document head untouched.
pub fn render_detail(
    locations: &[Location],
    site: &Site,
    slug: Option<&str>,
    env: &RenderEnv,
) -> Detail {
    let Some(location) = slug.and_then(|slug| locations.iter().find(|l| l.slug == slug)) else {
        return Detail {
            html: "<p>Location not found.</p>".to_string(),
            head: None,
        };
    };

    let head = HeadPatch {
        title: format!("{} | {}", location.name, site.brand_name),
        description: format!(
            "Details, hours, and ordering for {} at {}.",
            location.name, site.brand_name
        ),
    };

    let links = location.links.clone().unwrap_or_default();
    let buttons = detail_buttons(&links);
    let gallery: String = location
        .gallery_images
        .iter()
        .map(|img| render_picture(env, img, &location.name))
        .collect();

    let html = format!(
        r#"
    <div class="section">
      <div class="container">
        <div class="location-hero">
          {hero}
          <div class="location-hero__overlay">
            <div class="location-hero__content">
              <div class="pill">Hot coffee, good food</div>
              <h1>{name}</h1>
              <p>{hours}</p>
              <div class="btn-row">{buttons}</div>
            </div>
          </div>
        </div>
      </div>
    </div>
    <div class="section">
      <div class="container split">
        <div>
          <div class="eyebrow">Address</div>
          <p>{address}</p>
          {phone}
          <div class="tag-row">
            <span class="chip">{status}</span>
            <span class="chip">{hours_short}</span>
          </div>
        </div>
        <div>
          <div class="eyebrow">About this shop</div>
          <p>{notes}</p>
          <div class="gallery">
            {gallery}
          </div>
        </div>
      </div>
    </div>
  "#,
        hero = render_picture(env, &location.hero_image, &location.name),
        name = location.name,
        hours = location
            .hours_long
            .as_deref()
            .unwrap_or(&location.hours_short),
        address = location.address_lines.join("<br>"),
        phone = location
            .phone
            .as_deref()
            .map(|phone| format!("<p>{phone}</p>"))
            .unwrap_or_default(),
        status = match location.status {
            LocationStatus::ComingSoon => "Coming soon",
            LocationStatus::Open => "Open",
        },
        hours_short = location.hours_short,
        notes = location.notes.as_deref().unwrap_or(DEFAULT_NOTES),
    );

    Detail {
        html,
        head: Some(head),
    }
}

/// Action buttons for the detail hero, one per present link.
fn detail_buttons(links: &LocationLinks) -> String {
    [
        optional_button("Menu", links.menu_url.as_deref(), false),
        optional_button("Order", links.order_url.as_deref(), true),
        optional_button("Delivery", links.delivery_url.as_deref(), false),
        optional_button("Directions", links.directions_url.as_deref(), false),
    ]
    .into_iter()
    .filter(|b| !b.is_empty())
    .collect()
}

// ============================================================================
// Tests
// ============================================================================
