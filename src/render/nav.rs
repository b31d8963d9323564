//! Navigation and footer fragments.
//!
//! Rendered on every page. Active-route marking uses exact string
//! equality between the current page id and the fixed route set; at most
//! one link carries the marker.

use super::RenderEnv;
use crate::content::Site;

/// Fixed internal routes that participate in active-route marking,
/// as (page id, label) pairs in display order.
const NAV_ROUTES: [(&str, &str); 4] = [
    ("about", "About"),
    ("locations", "Locations"),
    ("events", "Events"),
    ("contact", "Contact"),
];

/// Active-route marker attribute for a nav link.
fn active_attr(route: &str, page_id: &str) -> &'static str {
    if route == page_id {
        r#"aria-current="page""#
    } else {
        ""
    }
}

/// Mobile navigation drawer display state. One boolean, nothing else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

#[allow(dead_code)]
impl DrawerState {
    /// Flip the drawer open/closed. Invoked by the toggle control.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// CSS class list for the drawer element.
    pub fn class(self) -> &'static str {
        if self.open {
            "mobile-drawer open"
        } else {
            "mobile-drawer"
        }
    }
}

/// Render the navigation bar plus the (closed) mobile drawer.
pub fn build_nav(site: &Site, page_id: &str, env: &RenderEnv) -> String {
    let base = &env.base;
    let links: String = NAV_ROUTES
        .iter()
        .map(|(route, label)| {
            format!(
                r#"        <a href="{base}{route}/" {active}>{label}</a>
"#,
                active = active_attr(route, page_id),
            )
        })
        .collect();
    let drawer_links: String = NAV_ROUTES
        .iter()
        .map(|(route, label)| format!("      <a href=\"{base}{route}/\">{label}</a>\n"))
        .collect();

    format!(
        r#"
    <div class="nav">
      <a class="nav__brand" href="{base}">{brand}</a>
      <div class="nav__links" aria-label="Primary">
{links}        <a href="{shop}" target="_blank" rel="noreferrer">Shop</a>
        <a href="{base}order/" {order_active}>Order</a>
      </div>
      <div class="nav__cta">
        <a class="btn primary" href="{base}order/">{cta}</a>
      </div>
      <button class="nav__toggle" aria-label="Toggle menu">
        <span></span><span></span><span></span>
      </button>
    </div>
    <div class="{drawer_class}" data-mobile-drawer>
{drawer_links}      <a href="{shop}" target="_blank" rel="noreferrer">Shop</a>
      <a href="{base}order/">Order</a>
      <a class="btn primary" href="{base}order/">{cta}</a>
    </div>
  "#,
        brand = site.brand_name,
        shop = site.shop_href,
        cta = site.primary_cta_label,
        order_active = active_attr("order", page_id),
        drawer_class = DrawerState::default().class(),
    )
}

/// Render the site footer: brand, tagline, internal and social links.
pub fn build_footer(site: &Site, env: &RenderEnv) -> String {
    format!(
        r#"
    <div class="footer">
      <div class="footer__inner">
        <div>
          <div class="footer__brand">{brand}</div>
          <p class="muted">{tagline}</p>
        </div>
        <div class="list">
          <a href="{base}careers/">Careers</a>
          <a href="{base}privacy/">Privacy Policy</a>
        </div>
        <div class="list">
          <a href="{instagram}" target="_blank" rel="noreferrer">Instagram</a>
          <a href="{facebook}" target="_blank" rel="noreferrer">Facebook</a>
        </div>
      </div>
    </div>
  "#,
        brand = site.brand_name,
        tagline = site.tagline,
        base = env.base,
        instagram = site.social.instagram,
        facebook = site.social.facebook,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    fn env() -> RenderEnv {
        RenderEnv {
            base: "./".into(),
            images: "assets/images".into(),
        }
    }

    fn marker_count(html: &str) -> usize {
        html.matches(r#"aria-current="page""#).count()
    }

    #[test]
    fn test_active_route_about() {
        let html = build_nav(&fixtures::site(), "about", &env());

        assert_eq!(marker_count(&html), 1);
        assert!(html.contains(r#"<a href="./about/" aria-current="page">About</a>"#));
    }

    #[test]
    fn test_active_route_order() {
        let html = build_nav(&fixtures::site(), "order", &env());

        assert_eq!(marker_count(&html), 1);
        assert!(html.contains(r#"<a href="./order/" aria-current="page">Order</a>"#));
    }

    #[test]
    fn test_no_active_route_for_home() {
        // "home" is not in the fixed route set, so no link is marked
        let html = build_nav(&fixtures::site(), "home", &env());
        assert_eq!(marker_count(&html), 0);
    }

    #[test]
    fn test_nav_brand_and_cta() {
        let site = fixtures::site();
        let html = build_nav(&site, "home", &env());

        assert!(html.contains(">Cafe Latte Co.</a>"));
        assert!(html.contains(&site.shop_href));
        assert!(html.contains(">Order ahead</a>"));
        // Drawer starts closed
        assert!(html.contains(r#"class="mobile-drawer" data-mobile-drawer"#));
    }

    #[test]
    fn test_drawer_toggle_flips_state() {
        let mut drawer = DrawerState::default();
        assert_eq!(drawer.class(), "mobile-drawer");

        drawer.toggle();
        assert_eq!(drawer.class(), "mobile-drawer open");

        drawer.toggle();
        assert_eq!(drawer.class(), "mobile-drawer");
    }

    #[test]
    fn test_footer_links() {
        let html = build_footer(&fixtures::site(), &env());

        assert!(html.contains(r#"<a href="./careers/">Careers</a>"#));
        assert!(html.contains(r#"<a href="./privacy/">Privacy Policy</a>"#));
        assert!(html.contains("https://instagram.com/cafelatteco"));
        assert!(html.contains("https://facebook.com/cafelatteco"));
        assert!(html.contains("Coffee, tacos, community."));
    }
}
