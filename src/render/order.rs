//! Order page: one row per location, plus an aggregate advisory for
//! locations where online ordering is not available yet.

use crate::content::Location;

use super::RenderEnv;

/// Projected order-page fragments.
pub struct OrderListing {
    /// One row per location, input order.
    pub list: String,
    /// Advisory line, present only when at least one location lacks an
    /// order URL.
    pub note: Option<String>,
}

/// Render the order listing and the aggregate advisory.
///
/// A location counts as unavailable whenever `links.orderUrl` is absent,
/// regardless of its coming-soon status.
pub fn render_listing(locations: &[Location], _env: &RenderEnv) -> OrderListing {
    let mut unavailable = 0usize;

    let list: String = locations
        .iter()
        .map(|location| {
            let links = location.links.clone().unwrap_or_default();
            let action = match location.order_url() {
                Some(url) => format!(
                    r#"<a class="btn primary" href="{url}" target="_blank" rel="noreferrer">Order</a>"#
                ),
                None => {
                    unavailable += 1;
                    r#"<span class="chip">Not yet available</span>"#.to_string()
                }
            };
            let delivery = links
                .delivery_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<a class="btn" href="{url}" target="_blank" rel="noreferrer">Delivery</a>"#
                    )
                })
                .unwrap_or_default();
            let directions = links
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
        <div class="order-card">
          <div>
            <div class="eyebrow">{address}</div>
            <h3>{name}</h3>
            <p>{hours}</p>
          </div>
          <div class="order-card__actions">
            {action}
            {delivery}
            {directions}
          </div>
        </div>
      "#,
                address = location.address_lines.join(" · "),
                name = location.name,
                hours = location.hours_short,
            )
        })
        .collect();

    let note = (unavailable > 0).then(|| {
        format!(
            r#"<div class="alert">Not available for {unavailable} location(s) yet. Coming soon.</div>"#
        )
    });

    OrderListing { list, note }
}

// ============================================================================
// Tests
// ============================================================================
