//! Events listing.

use super::{RenderEnv, picture::render_picture};
use crate::content::{Event, Location};
use crate::utils::date::format_display_date;

/// Label for events without a resolvable location.
const ALL_LOCATIONS: &str = "All locations";

/// Display name for an event's location.
///
/// An absent slug means the event applies everywhere; a slug that matches
/// nothing degrades to the same label rather than rendering a hole.
fn location_label<'a>(event: &Event, locations: &'a [Location]) -> &'a str {
    event
        .location_slug
        .as_deref()
        .and_then(|slug| locations.iter().find(|l| l.slug == slug))
        .map(|location| location.name.as_str())
        .unwrap_or(ALL_LOCATIONS)
}

/// Render every event as a card, input order preserved.
pub fn render_listing(events: &[Event], locations: &[Location], env: &RenderEnv) -> String {
    events
        .iter()
        .map(|event| {
            let cta = event
                .cta_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<a class="btn primary" href="{url}" target="_blank" rel="noreferrer">{label}</a>"#,
                        label = event.cta_label.as_deref().unwrap_or("More info"),
                    )
                })
                .unwrap_or_default();
            let directions = event
                .directions_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<a class="btn" href="{url}" target="_blank" rel="noreferrer">Directions</a>"#
                    )
                })
                .unwrap_or_default();

            format!(
                r#"
        <article class="card event-card">
          {img}
          <div>
            <div class="eyebrow">{location}</div>
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="tag-row">
              <span class="chip">{time}</span>
              <span class="chip">{date}</span>
            </div>
            <div class="btn-row" style="margin-top:10px;">
              {cta}
              {directions}
            </div>
          </div>
        </article>
      "#,
                img = render_picture(env, &event.image, &event.title),
                location = location_label(event, locations),
                title = event.title,
                description = event.description,
                time = event.time_display,
                date = format_display_date(&event.date_start_iso),
            )
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
