//! Content data contract shared by the runtime projector and the
//! build-time generator.

pub mod loader;
pub mod types;

pub use loader::{ContentStore, DocumentName, DocumentSource, FsSource, LoadError};
pub use types::{Announcement, Event, Location, LocationLinks, LocationStatus, Site};

#[cfg(test)]
pub mod fixtures {
    //! Sample content shared by render/generator tests.

    use super::loader::{DocumentName, DocumentSource, LoadError};
    use super::types::{Announcement, Event, Location, Site};

    pub const SITE_JSON: &str = r#"{
        "brandName": "Cafe Latte Co.",
        "tagline": "Coffee, tacos, community.",
        "heroHeadline": "Slow mornings, strong espresso",
        "heroSubhead": "Three Austin cafes pouring seasonal espresso.",
        "primaryCtaLabel": "Order ahead",
        "primaryCtaHref": "order/",
        "secondaryCtaLabel": "Find a cafe",
        "secondaryCtaHref": "locations/",
        "shopHref": "https://shop.cafelatteco.example",
        "social": {
            "instagram": "https://instagram.com/cafelatteco",
            "facebook": "https://facebook.com/cafelatteco"
        },
        "contactEmail": "hello@cafelatteco.example",
        "contactPhone": "(512) 555-0117",
        "pressEmail": "press@cafelatteco.example"
    }"#;

    pub const LOCATIONS_JSON: &str = r#"[
        {
            "slug": "downtown",
            "name": "Downtown",
            "addressLines": ["600 Congress Ave", "Austin, TX 78701"],
            "status": "open",
            "hoursShort": "7a-3p",
            "hoursLong": "Mon-Sun 7am to 3pm",
            "phone": "(512) 555-0142",
            "notes": "Street parking on 7th.",
            "heroImage": "loc-downtown",
            "galleryImages": ["bar-1", "latte-1", "patio-1"],
            "links": {
                "menuUrl": "https://example.com/menu",
                "orderUrl": "https://order.example.com/downtown",
                "directionsUrl": "https://maps.example.com/downtown"
            }
        },
        {
            "slug": "mueller",
            "name": "Mueller",
            "addressLines": ["1900 Aldrich St", "Austin, TX 78723"],
            "status": "open",
            "hoursShort": "7a-4p",
            "heroImage": "loc-mueller",
            "galleryImages": ["latte-1", "pastry-1"]
        },
        {
            "slug": "south-congress",
            "name": "South Congress",
            "addressLines": ["1600 S Congress Ave", "Austin, TX 78704"],
            "status": "comingSoon",
            "hoursShort": "Opening spring",
            "heroImage": "loc-soco",
            "galleryImages": ["patio-1", "render-1"]
        }
    ]"#;

    pub const EVENTS_JSON: &str = r#"[
        {
            "title": "Latte Art Throwdown",
            "description": "Monthly pour-off, open sign-up.",
            "locationSlug": "downtown",
            "dateStartISO": "2025-01-05T00:00:00Z",
            "timeDisplay": "6-9pm",
            "image": "event-throwdown",
            "ctaUrl": "https://example.com/throwdown",
            "ctaLabel": "Sign up"
        },
        {
            "title": "Cupping 101",
            "description": "Taste through the seasonal menu.",
            "dateStartISO": "sometime in spring",
            "timeDisplay": "10am",
            "image": "event-cupping"
        }
    ]"#;

    pub const ANNOUNCEMENTS_JSON: &str = r#"[
        {
            "headline": "Spring menu is live",
            "body": "Honey lavender latte and migas tacos are back.",
            "image": "announce-spring",
            "ctaHref": "locations/",
            "ctaLabel": "Find a cafe"
        },
        {
            "headline": "Now hiring baristas",
            "body": "All three locations, full and part time.",
            "image": "announce-hiring",
            "ctaHref": "careers/",
            "ctaLabel": "Apply"
        }
    ]"#;

    /// In-memory source serving the canned documents above.
    pub struct StaticSource;

    impl DocumentSource for StaticSource {
        fn fetch(&self, name: DocumentName) -> Result<String, LoadError> {
            let raw = match name {
                DocumentName::Site => SITE_JSON,
                DocumentName::Locations => LOCATIONS_JSON,
                DocumentName::Events => EVENTS_JSON,
                DocumentName::Announcements => ANNOUNCEMENTS_JSON,
            };
            Ok(raw.to_string())
        }
    }

    pub fn site() -> Site {
        serde_json::from_str(SITE_JSON).unwrap()
    }

    pub fn locations() -> Vec<Location> {
        serde_json::from_str(LOCATIONS_JSON).unwrap()
    }

    pub fn events() -> Vec<Event> {
        serde_json::from_str(EVENTS_JSON).unwrap()
    }

    pub fn announcements() -> Vec<Announcement> {
        serde_json::from_str(ANNOUNCEMENTS_JSON).unwrap()
    }
}
