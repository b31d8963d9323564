//! Content record types.
//!
//! Four documents make up the site content: `site` (singleton config),
//! `locations`, `events`, and `announcements` (ordered sequences). All
//! records deserialize from camelCase JSON. Optional fields stay optional
//! records here; absence means the corresponding markup is omitted, never
//! an error.

use serde::Deserialize;

// ============================================================================
// Site
// ============================================================================

/// Singleton site config: brand copy, CTA labels/targets, contact points.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub brand_name: String,
    pub tagline: String,
    pub hero_headline: String,
    pub hero_subhead: String,
    pub primary_cta_label: String,
    pub primary_cta_href: String,
    pub secondary_cta_label: String,
    pub secondary_cta_href: String,
    pub shop_href: String,
    pub social: SocialLinks,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub press_email: Option<String>,
}

/// Social profile links rendered in the footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
}

// ============================================================================
// Location
// ============================================================================

/// Open/coming-soon status of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LocationStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "comingSoon")]
    ComingSoon,
}

/// One café location. Identity key: `slug`, which also names the
/// generated detail page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub slug: String,
    pub name: String,
    pub address_lines: Vec<String>,
    pub status: LocationStatus,
    pub hours_short: String,
    #[serde(default)]
    pub hours_long: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub hero_image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub links: Option<LocationLinks>,
}

/// Per-location external links, each independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLinks {
    #[serde(default)]
    pub menu_url: Option<String>,
    #[serde(default)]
    pub order_url: Option<String>,
    #[serde(default)]
    pub delivery_url: Option<String>,
    #[serde(default)]
    pub directions_url: Option<String>,
}

impl Location {
    /// Order URL, when the location has one.
    pub fn order_url(&self) -> Option<&str> {
        self.links.as_ref()?.order_url.as_deref()
    }
}

// ============================================================================
// Event
// ============================================================================

/// A scheduled event, optionally tied to one location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub description: String,
    /// Absent slug means the event applies to all locations.
    #[serde(default)]
    pub location_slug: Option<String>,
    #[serde(rename = "dateStartISO")]
    pub date_start_iso: String,
    pub time_display: String,
    pub image: String,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub directions_url: Option<String>,
}

// ============================================================================
// Announcement
// ============================================================================

/// A homepage announcement card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub headline: String,
    pub body: String,
    pub image: String,
    pub cta_href: String,
    pub cta_label: String,
}

// ============================================================================
// Shape validation
// ============================================================================

/// Check a slug is nonempty and URL-safe (lowercase ascii, digits, hyphens).
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validate the locations document at the load boundary: every slug must
/// be URL-safe and unique (it names the generated detail page).
pub fn validate_locations(locations: &[Location]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for location in locations {
        if !is_valid_slug(&location.slug) {
            return Err(format!("invalid slug `{}`", location.slug));
        }
        if !seen.insert(location.slug.as_str()) {
            return Err(format!("duplicate slug `{}`", location.slug));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_location(slug: &str) -> Location {
        serde_json::from_str(&format!(
            r#"{{
                "slug": "{slug}",
                "name": "Test",
                "addressLines": ["1 Main St", "Austin, TX"],
                "status": "open",
                "hoursShort": "7a-3p",
                "heroImage": "loc-test"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_location_optional_fields_absent() {
        let loc = minimal_location("downtown");

        assert_eq!(loc.slug, "downtown");
        assert_eq!(loc.status, LocationStatus::Open);
        assert!(loc.hours_long.is_none());
        assert!(loc.phone.is_none());
        assert!(loc.notes.is_none());
        assert!(loc.links.is_none());
        assert!(loc.gallery_images.is_empty());
        assert!(loc.order_url().is_none());
    }

    #[test]
    fn test_location_partial_links() {
        let loc: Location = serde_json::from_str(
            r#"{
                "slug": "mueller",
                "name": "Mueller",
                "addressLines": ["2 Oak Ave"],
                "status": "comingSoon",
                "hoursShort": "8a-2p",
                "heroImage": "loc-mueller",
                "links": { "menuUrl": "https://example.com/menu" }
            }"#,
        )
        .unwrap();

        assert_eq!(loc.status, LocationStatus::ComingSoon);
        let links = loc.links.unwrap();
        assert_eq!(links.menu_url.as_deref(), Some("https://example.com/menu"));
        assert!(links.order_url.is_none());
        assert!(links.delivery_url.is_none());
        assert!(links.directions_url.is_none());
    }

    #[test]
    fn test_event_optional_location() {
        let event: Event = serde_json::from_str(
            r#"{
                "title": "Latte Art Throwdown",
                "description": "Monthly pour-off.",
                "dateStartISO": "2025-01-05T00:00:00Z",
                "timeDisplay": "6-9pm",
                "image": "event-throwdown"
            }"#,
        )
        .unwrap();

        assert!(event.location_slug.is_none());
        assert_eq!(event.date_start_iso, "2025-01-05T00:00:00Z");
        assert!(event.cta_url.is_none());
    }

    #[test]
    fn test_site_optional_contacts() {
        let site: Site = serde_json::from_str(
            r#"{
                "brandName": "Cafe Latte Co.",
                "tagline": "Coffee and tacos",
                "heroHeadline": "Slow mornings",
                "heroSubhead": "Seasonal espresso",
                "primaryCtaLabel": "Order",
                "primaryCtaHref": "order/",
                "secondaryCtaLabel": "Find us",
                "secondaryCtaHref": "locations/",
                "shopHref": "https://shop.example.com",
                "social": { "instagram": "https://ig.example", "facebook": "https://fb.example" },
                "contactEmail": "hello@example.com"
            }"#,
        )
        .unwrap();

        assert!(site.contact_phone.is_none());
        assert!(site.press_email.is_none());
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("downtown"));
        assert!(is_valid_slug("south-congress-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Down Town"));
        assert!(!is_valid_slug("café"));
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let locations = vec![minimal_location("downtown"), minimal_location("downtown")];
        assert!(validate_locations(&locations).is_err());

        let locations = vec![minimal_location("downtown"), minimal_location("mueller")];
        assert!(validate_locations(&locations).is_ok());
    }
}
