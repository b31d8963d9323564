//! Page Projector.
//!
//! Maps the loaded content documents into HTML fragments, one per mount
//! point of the hosting page. Each page type selects the documents it
//! needs; projection is a pure function of those documents, so
//! re-projecting replaces a mount's fragment wholesale.
//!
//! # Flow
//!
//! ```text
//! PageContext (data-page, data-location-slug, url path)
//!     │
//!     ├── nav/footer fragments          (every page)
//!     ├── per-page fragments            (PageKind dispatch)
//!     └── HeadPatch                     (location-detail only)
//! ```

pub mod contact;
pub mod events;
pub mod home;
pub mod locations;
pub mod nav;
pub mod order;
pub mod picture;

use crate::{
    config::SiteConfig,
    content::{ContentStore, DocumentSource, FsSource, LoadError},
    log,
};
use anyhow::Result;

// ============================================================================
// Page Kinds
// ============================================================================

/// Supported page types, keyed by the hosting document's `data-page` id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    About,
    Locations,
    LocationDetail,
    Events,
    Order,
    Contact,
}

impl PageKind {
    /// Map a page identifier to its kind. Unknown ids get no page-specific
    /// fragments (nav/footer still render).
    pub fn from_page_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "locations" => Some(Self::Locations),
            "location-detail" => Some(Self::LocationDetail),
            "events" => Some(Self::Events),
            "order" => Some(Self::Order),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

// ============================================================================
// Mount Points
// ============================================================================

/// Named insertion points exposed by the hosting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    Nav,
    Footer,
    HomeHero,
    LocationsPreview,
    Announcements,
    PhotoGrid,
    LocationsList,
    LocationDetail,
    EventsList,
    OrderList,
    OrderNote,
    Contact,
}

impl Mount {
    /// The `data-*` attribute marking this mount in the hosting document.
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Nav => "data-nav",
            Self::Footer => "data-footer",
            Self::HomeHero => "data-home-hero",
            Self::LocationsPreview => "data-locations-preview",
            Self::Announcements => "data-announcements",
            Self::PhotoGrid => "data-photo-grid",
            Self::LocationsList => "data-locations-list",
            Self::LocationDetail => "data-location-detail",
            Self::EventsList => "data-events-list",
            Self::OrderList => "data-order-list",
            Self::OrderNote => "data-order-note",
            Self::Contact => "data-contact",
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Document head mutation performed by the location-detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadPatch {
    pub title: String,
    pub description: String,
}

/// The projected fragments for one page view.
#[derive(Debug, Default)]
pub struct Projection {
    mounts: Vec<(Mount, String)>,
    pub head: Option<HeadPatch>,
}

impl Projection {
    /// Set a mount's fragment, replacing any previous content wholesale.
    pub fn set(&mut self, mount: Mount, html: String) {
        if let Some(entry) = self.mounts.iter_mut().find(|(m, _)| *m == mount) {
            entry.1 = html;
        } else {
            self.mounts.push((mount, html));
        }
    }

    /// Fragment for a mount, if the page projected one.
    #[allow(dead_code)]
    pub fn fragment(&self, mount: Mount) -> Option<&str> {
        self.mounts
            .iter()
            .find(|(m, _)| *m == mount)
            .map(|(_, html)| html.as_str())
    }

    /// All projected fragments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Mount, &str)> {
        self.mounts.iter().map(|(m, html)| (*m, html.as_str()))
    }
}

// ============================================================================
// Page Context
// ============================================================================

/// Document-level metadata the projector reads from the hosting page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// `data-page` attribute value.
    pub page_id: String,
    /// `data-location-slug` attribute value, when present.
    pub location_slug: Option<String>,
    /// Current URL path, the slug fallback for location-detail pages.
    pub url_path: Option<String>,
}

impl PageContext {
    pub fn new(page_id: &str) -> Self {
        Self {
            page_id: page_id.to_string(),
            ..Self::default()
        }
    }

    /// Slug for location-detail resolution: explicit metadata first, else
    /// the last URL path segment with a trailing `.html` stripped.
    pub fn detail_slug(&self) -> Option<&str> {
        if let Some(slug) = self.location_slug.as_deref() {
            return Some(slug);
        }
        let path = self.url_path.as_deref()?;
        let segment = path.rsplit('/').next()?;
        let segment = segment.strip_suffix(".html").unwrap_or(segment);
        (!segment.is_empty()).then_some(segment)
    }
}

// ============================================================================
// Render Environment
// ============================================================================

/// Path context shared by every fragment builder.
#[derive(Debug, Clone)]
pub struct RenderEnv {
    /// Relative prefix from the current page to the site root.
    pub base: String,
    /// Images directory under the base path.
    pub images: String,
}

impl RenderEnv {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base: config.base.base_path.clone(),
            images: config.build.images.to_string_lossy().into_owned(),
        }
    }
}

// ============================================================================
// Projection Entry Point
// ============================================================================

/// Project every fragment the given page needs.
///
/// Documents for a page are loaded through the store (memoized); the
/// fragments themselves are built synchronously once all needed documents
/// resolved. A load failure aborts the whole projection.
pub fn project<S: DocumentSource>(
    ctx: &PageContext,
    store: &ContentStore<S>,
    env: &RenderEnv,
) -> Result<Projection, LoadError> {
    let mut projection = Projection::default();

    let site = store.site()?;
    projection.set(Mount::Nav, nav::build_nav(site, &ctx.page_id, env));
    projection.set(Mount::Footer, nav::build_footer(site, env));

    match PageKind::from_page_id(&ctx.page_id) {
        Some(PageKind::Home) => {
            projection.set(Mount::HomeHero, home::render_hero(site, env));
            let locations = store.locations()?;
            let announcements = store.announcements()?;
            projection.set(
                Mount::LocationsPreview,
                home::render_locations_preview(locations, env),
            );
            projection.set(
                Mount::Announcements,
                home::render_announcements(announcements, env),
            );
            projection.set(Mount::PhotoGrid, home::render_photo_grid(locations, env));
        }
        Some(PageKind::About) => {
            let locations = store.locations()?;
            projection.set(Mount::PhotoGrid, home::render_photo_grid(locations, env));
        }
        Some(PageKind::Locations) => {
            let locations = store.locations()?;
            projection.set(
                Mount::LocationsList,
                locations::render_listing(locations, env),
            );
        }
        Some(PageKind::LocationDetail) => {
            let all = store.locations()?;
            let detail = locations::render_detail(all, site, ctx.detail_slug(), env);
            projection.set(Mount::LocationDetail, detail.html);
            projection.head = detail.head;
        }
        Some(PageKind::Events) => {
            let events = store.events()?;
            let locations = store.locations()?;
            projection.set(
                Mount::EventsList,
                events::render_listing(events, locations, env),
            );
        }
        Some(PageKind::Order) => {
            let locations = store.locations()?;
            let order = order::render_listing(locations, env);
            projection.set(Mount::OrderList, order.list);
            if let Some(note) = order.note {
                projection.set(Mount::OrderNote, note);
            }
        }
        Some(PageKind::Contact) => {
            projection.set(Mount::Contact, contact::render_contact(site, env));
        }
        None => {}
    }

    Ok(projection)
}

// ============================================================================
// CLI Entry Point
// ============================================================================

/// `barista render` - project one page's fragments and print them.
///
/// Load failures are logged and swallowed: the page simply fails to
/// populate, matching the fail-silent posture of the live site.
pub fn render_fragments(
    config: &SiteConfig,
    page_id: &str,
    slug: Option<&str>,
    url_path: Option<&str>,
) -> Result<()> {
    let store = ContentStore::new(FsSource::new(config.data_dir()));
    let env = RenderEnv::from_config(config);
    let mut ctx = PageContext::new(page_id);
    ctx.location_slug = slug.map(str::to_string);
    ctx.url_path = url_path.map(str::to_string);

    let projection = match project(&ctx, &store, &env) {
        Ok(projection) => projection,
        Err(err) => {
            log!("error"; "{:#}", anyhow::Error::new(err));
            return Ok(());
        }
    };

    if let Some(head) = &projection.head {
        log!("render"; "title: {}", head.title);
        log!("render"; "description: {}", head.description);
    }
    for (mount, html) in projection.iter() {
        println!("<!-- [{}] -->", mount.attr());
        println!("{}", html.trim());
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::StaticSource;

    fn env() -> RenderEnv {
        RenderEnv {
            base: "./".into(),
            images: "assets/images".into(),
        }
    }

    #[test]
    fn test_page_kind_mapping() {
        assert_eq!(PageKind::from_page_id("home"), Some(PageKind::Home));
        assert_eq!(
            PageKind::from_page_id("location-detail"),
            Some(PageKind::LocationDetail)
        );
        assert_eq!(PageKind::from_page_id("checkout"), None);
    }

    #[test]
    fn test_detail_slug_prefers_metadata() {
        let ctx = PageContext {
            page_id: "location-detail".into(),
            location_slug: Some("downtown".into()),
            url_path: Some("/cafelatteco/locations/mueller.html".into()),
        };
        assert_eq!(ctx.detail_slug(), Some("downtown"));
    }

    #[test]
    fn test_detail_slug_falls_back_to_url() {
        let ctx = PageContext {
            page_id: "location-detail".into(),
            location_slug: None,
            url_path: Some("/cafelatteco/locations/mueller.html".into()),
        };
        assert_eq!(ctx.detail_slug(), Some("mueller"));
    }

    #[test]
    fn test_detail_slug_absent() {
        let ctx = PageContext::new("location-detail");
        assert_eq!(ctx.detail_slug(), None);
    }

    #[test]
    fn test_projection_set_replaces_wholesale() {
        let mut projection = Projection::default();
        projection.set(Mount::Nav, "<nav>one</nav>".into());
        projection.set(Mount::Nav, "<nav>two</nav>".into());

        assert_eq!(projection.fragment(Mount::Nav), Some("<nav>two</nav>"));
        assert_eq!(projection.iter().count(), 1);
    }

    #[test]
    fn test_home_page_projects_all_home_mounts() {
        let store = ContentStore::new(StaticSource);
        let projection = project(&PageContext::new("home"), &store, &env()).unwrap();

        for mount in [
            Mount::Nav,
            Mount::Footer,
            Mount::HomeHero,
            Mount::LocationsPreview,
            Mount::Announcements,
            Mount::PhotoGrid,
        ] {
            assert!(projection.fragment(mount).is_some(), "missing {mount:?}");
        }
        assert!(projection.fragment(Mount::EventsList).is_none());
        assert!(projection.head.is_none());
    }

    #[test]
    fn test_unknown_page_projects_only_chrome() {
        let store = ContentStore::new(StaticSource);
        let projection = project(&PageContext::new("checkout"), &store, &env()).unwrap();

        assert!(projection.fragment(Mount::Nav).is_some());
        assert!(projection.fragment(Mount::Footer).is_some());
        assert_eq!(projection.iter().count(), 2);
    }

    #[test]
    fn test_detail_page_sets_head_patch() {
        let store = ContentStore::new(StaticSource);
        let ctx = PageContext {
            page_id: "location-detail".into(),
            location_slug: Some("downtown".into()),
            url_path: None,
        };
        let projection = project(&ctx, &store, &env()).unwrap();

        let head = projection.head.unwrap();
        assert_eq!(head.title, "Downtown | Cafe Latte Co.");
        assert!(head.description.contains("Downtown"));
    }
}
