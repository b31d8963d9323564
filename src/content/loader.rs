//! Memoizing content document loader.
//!
//! `ContentStore` retrieves the four named JSON documents through a
//! `DocumentSource`, parses them, and caches each successful result for
//! the lifetime of the store. Repeated accessor calls never re-fetch.
//! Content is immutable for a session, so the cache needs no teardown
//! or invalidation.

use super::types::{self, Announcement, Event, Location, Site};
use std::{cell::OnceCell, fmt, fs, io, path::PathBuf};
use thiserror::Error;

// ============================================================================
// Document Names
// ============================================================================

/// Logical names of the four content documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentName {
    Site,
    Locations,
    Events,
    Announcements,
}

impl DocumentName {
    /// File stem of the document (`<stem>.json` under the data directory).
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Locations => "locations",
            Self::Events => "events",
            Self::Announcements => "announcements",
        }
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure to load a content document. Callers never get a default
/// document on failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to fetch `{name}` data")]
    Fetch {
        name: DocumentName,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse `{name}` data")]
    Parse {
        name: DocumentName,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid `{name}` data: {message}")]
    Validation { name: DocumentName, message: String },
}

// ============================================================================
// Document Sources
// ============================================================================

/// Raw document retrieval, abstracted so tests can stub it out.
pub trait DocumentSource {
    /// Fetch the raw text of a named document.
    fn fetch(&self, name: DocumentName) -> Result<String, LoadError>;
}

/// Reads documents from `<data_dir>/<name>.json` on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsSource {
    data_dir: PathBuf,
}

impl FsSource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl DocumentSource for FsSource {
    fn fetch(&self, name: DocumentName) -> Result<String, LoadError> {
        let path = self.data_dir.join(format!("{}.json", name.stem()));
        fs::read_to_string(&path).map_err(|source| LoadError::Fetch { name, source })
    }
}

// ============================================================================
// Content Store
// ============================================================================

/// Session-scoped store for the four content documents.
///
/// Each document is fetched and parsed at most once; later calls return
/// the cached record. A load failure is returned to the caller and is
/// retried on the next call, since nothing was cached.
pub struct ContentStore<S: DocumentSource> {
    source: S,
    site: OnceCell<Site>,
    locations: OnceCell<Vec<Location>>,
    events: OnceCell<Vec<Event>>,
    announcements: OnceCell<Vec<Announcement>>,
}

impl<S: DocumentSource> ContentStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            site: OnceCell::new(),
            locations: OnceCell::new(),
            events: OnceCell::new(),
            announcements: OnceCell::new(),
        }
    }

    /// Site config document.
    pub fn site(&self) -> Result<&Site, LoadError> {
        match self.site.get() {
            Some(site) => Ok(site),
            None => {
                let site = self.parse(DocumentName::Site)?;
                Ok(self.site.get_or_init(|| site))
            }
        }
    }

    /// Locations document, shape-validated at the load boundary.
    pub fn locations(&self) -> Result<&[Location], LoadError> {
        match self.locations.get() {
            Some(locations) => Ok(locations),
            None => {
                let locations: Vec<Location> = self.parse(DocumentName::Locations)?;
                types::validate_locations(&locations).map_err(|message| {
                    LoadError::Validation {
                        name: DocumentName::Locations,
                        message,
                    }
                })?;
                Ok(self.locations.get_or_init(|| locations))
            }
        }
    }

    /// Events document.
    pub fn events(&self) -> Result<&[Event], LoadError> {
        match self.events.get() {
            Some(events) => Ok(events),
            None => {
                let events = self.parse(DocumentName::Events)?;
                Ok(self.events.get_or_init(|| events))
            }
        }
    }

    /// Announcements document.
    pub fn announcements(&self) -> Result<&[Announcement], LoadError> {
        match self.announcements.get() {
            Some(announcements) => Ok(announcements),
            None => {
                let announcements = self.parse(DocumentName::Announcements)?;
                Ok(self.announcements.get_or_init(|| announcements))
            }
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(&self, name: DocumentName) -> Result<T, LoadError> {
        let raw = self.source.fetch(name)?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse { name, source })
    }
}

// ============================================================================
// Tests
// ============================================================================
